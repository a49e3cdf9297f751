//! Timezone labels for maintenance windows.
//!
//! An explicit abbreviation in the notice wins. Otherwise the state code of the
//! service address picks the zone, and failing both the window is labelled
//! `Local Time`. A literal "local time" in the text carries no zone of its own,
//! so it does not stop the address lookup.

use std::fmt;

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::extractors::compile;

pub const LOCAL_TIME_LABEL: &str = "Local Time";

/// Abbreviations accepted all-uppercase or all-lowercase, with the fixed-offset
/// zone they denote.
pub const EXPLICIT_ZONES: &[(&str, &str)] = &[
    ("AKST", "Etc/GMT+9"),
    ("AKDT", "Etc/GMT+8"),
    ("EST", "Etc/GMT+5"),
    ("EDT", "Etc/GMT+4"),
    ("CST", "Etc/GMT+6"),
    ("CDT", "Etc/GMT+5"),
    ("MST", "Etc/GMT+7"),
    ("MDT", "Etc/GMT+6"),
    ("PST", "Etc/GMT+8"),
    ("PDT", "Etc/GMT+7"),
    ("HST", "Etc/GMT+10"),
    ("UTC", "UTC"),
    ("GMT", "Etc/GMT"),
];

/// US state (plus DC) to display label and IANA zone.
pub const STATE_ZONES: &[(&str, &str, &str)] = &[
    // Eastern
    ("CT", "EST", "America/New_York"),
    ("DC", "EST", "America/New_York"),
    ("DE", "EST", "America/New_York"),
    ("FL", "EST", "America/New_York"),
    ("GA", "EST", "America/New_York"),
    ("IN", "EST", "America/Indiana/Indianapolis"),
    ("KY", "EST", "America/Kentucky/Louisville"),
    ("MA", "EST", "America/New_York"),
    ("MD", "EST", "America/New_York"),
    ("ME", "EST", "America/New_York"),
    ("MI", "EST", "America/Detroit"),
    ("NC", "EST", "America/New_York"),
    ("NH", "EST", "America/New_York"),
    ("NJ", "EST", "America/New_York"),
    ("NY", "EST", "America/New_York"),
    ("OH", "EST", "America/New_York"),
    ("PA", "EST", "America/New_York"),
    ("RI", "EST", "America/New_York"),
    ("SC", "EST", "America/New_York"),
    ("TN", "EST", "America/New_York"),
    ("VA", "EST", "America/New_York"),
    ("VT", "EST", "America/New_York"),
    ("WV", "EST", "America/New_York"),
    // Central
    ("AL", "CST", "America/Chicago"),
    ("AR", "CST", "America/Chicago"),
    ("IA", "CST", "America/Chicago"),
    ("IL", "CST", "America/Chicago"),
    ("KS", "CST", "America/Chicago"),
    ("LA", "CST", "America/Chicago"),
    ("MN", "CST", "America/Chicago"),
    ("MO", "CST", "America/Chicago"),
    ("MS", "CST", "America/Chicago"),
    ("ND", "CST", "America/Chicago"),
    ("NE", "CST", "America/Chicago"),
    ("OK", "CST", "America/Chicago"),
    ("SD", "CST", "America/Chicago"),
    ("TX", "CST", "America/Chicago"),
    ("WI", "CST", "America/Chicago"),
    // Mountain
    ("AZ", "MST", "America/Phoenix"),
    ("CO", "MST", "America/Denver"),
    ("ID", "MST", "America/Boise"),
    ("MT", "MST", "America/Denver"),
    ("NM", "MST", "America/Denver"),
    ("NV", "MST", "America/Denver"),
    ("UT", "MST", "America/Denver"),
    ("WY", "MST", "America/Denver"),
    // Pacific and beyond
    ("CA", "PST", "America/Los_Angeles"),
    ("OR", "PST", "America/Los_Angeles"),
    ("WA", "PST", "America/Los_Angeles"),
    ("AK", "AKST", "America/Anchorage"),
    ("HI", "HST", "Pacific/Honolulu"),
];

static EXPLICIT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let alternation = EXPLICIT_ZONES
        .iter()
        .flat_map(|(abbr, _)| [abbr.to_string(), abbr.to_ascii_lowercase()])
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"\b({alternation})\b"))
});
static LOCAL_TIME_TOKEN: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\blocal\s*time\b"));
static STATE_BEFORE_ZIP: Lazy<Regex> = Lazy::new(|| compile(r",\s*([A-Z]{2})\s*\d{5}"));
static BARE_STATE: Lazy<Regex> = Lazy::new(|| compile(r"\b([A-Z]{2})\b"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneSource {
    Explicit,
    State,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTimezone {
    pub label: String,
    pub source: TimezoneSource,
    #[serde(skip)]
    pub zone: Option<Tz>,
}

impl ResolvedTimezone {
    pub fn local() -> Self {
        Self {
            label: LOCAL_TIME_LABEL.to_string(),
            source: TimezoneSource::Default,
            zone: None,
        }
    }

    fn new(label: &str, source: TimezoneSource, iana: &str) -> Self {
        Self {
            label: label.to_string(),
            source,
            zone: iana.parse::<Tz>().ok(),
        }
    }
}

impl fmt::Display for ResolvedTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn resolve_timezone(text: &str, address: Option<&str>) -> ResolvedTimezone {
    if let Some(resolved) = explicit_timezone(text) {
        return resolved;
    }

    if let Some(state) = address.and_then(state_code) {
        if let Some(&(_, label, iana)) = STATE_ZONES.iter().find(|(code, _, _)| *code == state) {
            debug!(state, label, "timezone inferred from address");
            return ResolvedTimezone::new(label, TimezoneSource::State, iana);
        }
    }

    if LOCAL_TIME_TOKEN.is_match(text) {
        debug!("notice gives local time without a usable state code");
    }
    ResolvedTimezone::local()
}

fn explicit_timezone(text: &str) -> Option<ResolvedTimezone> {
    let abbr = EXPLICIT_TOKEN.captures(text)?.get(1)?.as_str().to_ascii_uppercase();
    let &(label, iana) = EXPLICIT_ZONES.iter().find(|(known, _)| *known == abbr)?;
    debug!(label, "explicit timezone token");
    Some(ResolvedTimezone::new(label, TimezoneSource::Explicit, iana))
}

/// Finds a known state code in an address, preferring the `, ST 12345` shape.
pub fn state_code(address: &str) -> Option<&str> {
    let known = |code: &str| STATE_ZONES.iter().any(|(state, _, _)| *state == code);

    STATE_BEFORE_ZIP
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|code| known(*code))
        .or_else(|| {
            BARE_STATE
                .captures_iter(address)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .find(|code| known(*code))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_fifty_states_and_dc() {
        assert_eq!(STATE_ZONES.len(), 51);
        for (state, _, iana) in STATE_ZONES {
            assert!(iana.parse::<Tz>().is_ok(), "{state} maps to unknown zone {iana}");
        }
        for (abbr, iana) in EXPLICIT_ZONES {
            assert!(iana.parse::<Tz>().is_ok(), "{abbr} maps to unknown zone {iana}");
        }
    }

    #[test]
    fn explicit_abbreviation_wins_over_address() {
        let resolved = resolve_timezone("window 1:00 AM - 3:00 AM EDT", Some("Austin, TX 78701"));
        assert_eq!(resolved.label, "EDT");
        assert_eq!(resolved.source, TimezoneSource::Explicit);
        assert!(resolved.zone.is_some());
    }

    #[test]
    fn words_and_mixed_case_are_not_abbreviations() {
        let resolved = resolve_timezone("the cost of that estimate, Est. Pdt", None);
        assert_eq!(resolved, ResolvedTimezone::local());
    }

    #[test]
    fn lowercase_abbreviation_is_explicit() {
        let resolved = resolve_timezone("1:00 am to 3:00 am est", Some("Reno NV 89501"));
        assert_eq!(resolved.label, "EST");
        assert_eq!(resolved.source, TimezoneSource::Explicit);
        assert_eq!(resolved.zone, "Etc/GMT+5".parse::<Tz>().ok());
    }

    #[test]
    fn state_from_address() {
        let resolved = resolve_timezone(
            "window of 12:00AM-6:00AM, local time.",
            Some("2398 E CAMELBACK RD PHOENIX, AZ 85016"),
        );
        assert_eq!(resolved.label, "MST");
        assert_eq!(resolved.source, TimezoneSource::State);
        assert_eq!(resolved.zone, Some(chrono_tz::America::Phoenix));
    }

    #[test]
    fn bare_state_fallback_skips_unknown_codes() {
        assert_eq!(state_code("12 MAIN RD SEATTLE WA"), Some("WA"));
        assert_eq!(state_code("100 Main St, Springfield, IL 62701"), Some("IL"));
        assert_eq!(state_code("Unit 4, RD 9"), None);
    }

    #[test]
    fn defaults_to_local_time() {
        let resolved = resolve_timezone("no zone", Some("[Service Address]"));
        assert_eq!(resolved.to_string(), LOCAL_TIME_LABEL);
        assert_eq!(resolved.source, TimezoneSource::Default);
        assert!(resolved.zone.is_none());
    }
}
