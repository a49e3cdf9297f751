use std::ops::Range;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone as _, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::errors::WindowError;
use crate::extractors::compile;
use crate::timezone::ResolvedTimezone;

const DISPLAY_FORMAT: &str = "%m/%d/%Y %I:%M %p";

static PERFORMED_ON_DATE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)performed on (\d{2}/\d{2}/\d{4})"));
static GENERIC_DATE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)(\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{2,4}\b)",
    )
});
static NUMERIC_DATE: Lazy<Regex> = Lazy::new(|| compile(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$"));
static WRITTEN_DATE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^([a-z]+)\s+(\d{1,2}),?\s+(\d{2,4})$"));

static WINDOW_OF_TIMES: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)maintenance window of (\d{1,2}:\d{2}[AP]M)-(\d{1,2}:\d{2}[AP]M)")
});
static GENERIC_TIMES: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(\d{1,2}(?::?\d{2})?\s*(?:AM|PM)?)\s*(?:-|to)\s*(\d{1,2}(?::?\d{2})?\s*(?:AM|PM)?)\b",
    )
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Source of "today" for notices that give a time range but no date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub timezone: ResolvedTimezone,
}

impl MaintenanceWindow {
    pub fn formatted_start(&self) -> String {
        format!("{} {}", self.start.format(DISPLAY_FORMAT), self.timezone)
    }

    pub fn formatted_end(&self) -> String {
        format!("{} {}", self.end.format(DISPLAY_FORMAT), self.timezone)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Both bounds in UTC, when the timezone label maps to a concrete zone.
    pub fn to_utc(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let zone = self.timezone.zone?;
        let start = zone.from_local_datetime(&self.start).earliest()?;
        let end = zone.from_local_datetime(&self.end).earliest()?;
        Some((start.with_timezone(&Utc), end.with_timezone(&Utc)))
    }
}

/// Moves `end` to the following day when it does not come after `start`.
/// Applied once; never iterated.
pub fn apply_rollover(start: NaiveDateTime, end: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    if end <= start {
        (start, end + Duration::days(1))
    } else {
        (start, end)
    }
}

pub fn resolve_window(
    text: &str,
    timezone: ResolvedTimezone,
    clock: &dyn Clock,
) -> Option<MaintenanceWindow> {
    let date = find_date(text);
    let times = find_time_range(text, date.as_ref().map(|(_, span)| span.clone()));

    if date.is_none() && times.is_none() {
        debug!("no date or time range in notice");
        return None;
    }

    let day = match date {
        Some((day, _)) => day,
        None => {
            let today = clock.today();
            debug!(%today, "time range without a date, using today");
            today
        }
    };
    let (start_time, end_time) = times.unwrap_or((NaiveTime::MIN, NaiveTime::MIN));
    let (start, end) = apply_rollover(day.and_time(start_time), day.and_time(end_time));

    Some(MaintenanceWindow {
        start,
        end,
        timezone,
    })
}

fn find_date(text: &str) -> Option<(NaiveDate, Range<usize>)> {
    PERFORMED_ON_DATE
        .captures_iter(text)
        .chain(GENERIC_DATE.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .find_map(|token| match parse_date(token.as_str()) {
            Ok(date) => Some((date, token.range())),
            Err(err) => {
                debug!(%err, "skipping date token");
                None
            }
        })
}

fn find_time_range(
    text: &str,
    date_span: Option<Range<usize>>,
) -> Option<(NaiveTime, NaiveTime)> {
    let primary = WINDOW_OF_TIMES.captures_iter(text);
    let generic = GENERIC_TIMES
        .captures_iter(text)
        .filter(|caps| is_time_range_candidate(text, caps, date_span.as_ref()));

    primary.chain(generic).find_map(|caps| {
        let start = caps.get(1)?.as_str();
        let end = caps.get(2)?.as_str();
        match (parse_time(start), parse_time(end)) {
            (Ok(start), Ok(end)) => Some((start, end)),
            (Err(err), _) | (_, Err(err)) => {
                debug!(%err, "skipping time range");
                None
            }
        }
    })
}

/// Keeps generic ranges that read as clock times: a colon or AM/PM on either
/// side, or two bare `HMM`/`HHMM` sides that are not part of a longer dashed
/// digit run such as a phone number.
fn is_time_range_candidate(
    text: &str,
    caps: &Captures<'_>,
    date_span: Option<&Range<usize>>,
) -> bool {
    let (Some(whole), Some(start), Some(end)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return false;
    };
    if date_span.is_some_and(|span| whole.start() < span.end && span.start < whole.end()) {
        return false;
    }

    let (start, end) = (start.as_str().trim(), end.as_str().trim());
    let marked = |side: &str| side.contains(':') || side.to_ascii_uppercase().ends_with('M');
    if marked(start) || marked(end) {
        return true;
    }

    let compact =
        |side: &str| (3..=4).contains(&side.len()) && side.bytes().all(|b| b.is_ascii_digit());
    let digit = |c: char| c.is_ascii_digit();
    let chained = text[whole.end()..]
        .strip_prefix('-')
        .is_some_and(|rest| rest.starts_with(digit))
        || text[..whole.start()]
            .strip_suffix('-')
            .is_some_and(|rest| rest.ends_with(digit));

    compact(start) && compact(end) && !chained
}

fn parse_date(token: &str) -> Result<NaiveDate, WindowError> {
    let invalid = || WindowError::InvalidDate(token.to_string());
    let token = token.trim();

    let (month, day, year) = if let Some(caps) = NUMERIC_DATE.captures(token) {
        let month: u32 = caps[1].parse().map_err(|_| invalid())?;
        let day: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year = expand_year(&caps[3]).ok_or_else(invalid)?;
        (month, day, year)
    } else if let Some(caps) = WRITTEN_DATE.captures(token) {
        let name = caps[1].to_ascii_lowercase();
        let month = MONTHS
            .iter()
            .position(|prefix| name.starts_with(prefix))
            .ok_or_else(invalid)? as u32
            + 1;
        let day: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year = expand_year(&caps[3]).ok_or_else(invalid)?;
        (month, day, year)
    } else {
        return Err(invalid());
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn expand_year(raw: &str) -> Option<i32> {
    let value: i32 = raw.parse().ok()?;
    match raw.len() {
        2 => Some(2000 + value),
        4 => Some(value),
        _ => None,
    }
}

fn parse_time(token: &str) -> Result<NaiveTime, WindowError> {
    let invalid = || WindowError::InvalidTime(token.to_string());
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    if !compact.is_ascii() {
        return Err(invalid());
    }

    let (clock, meridiem) = match compact.len().checked_sub(2).map(|at| compact.split_at(at)) {
        Some((clock, suffix @ ("AM" | "PM"))) => (clock, Some(suffix)),
        _ => (compact.as_str(), None),
    };

    let (hour, minute) = match clock.split_once(':') {
        Some((hour, minute)) => (hour, minute),
        None if matches!(clock.len(), 3 | 4) => clock.split_at(clock.len() - 2),
        None if matches!(clock.len(), 1 | 2) => (clock, "00"),
        None => return Err(invalid()),
    };
    let mut hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    match meridiem {
        Some(_) if hour == 0 || hour > 12 => {
            return Err(WindowError::OutOfRange { hour, minute });
        }
        Some("AM") if hour == 12 => hour = 0,
        Some("PM") if hour != 12 => hour += 12,
        _ => {}
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(WindowError::OutOfRange { hour, minute })
}
