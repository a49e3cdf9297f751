use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::ParsedFields;

pub const DEFAULT_PROVIDER_NAME: &str = "vCom";
pub const DEFAULT_SUPPORT_PHONE: &str = "800-804-8266 opt 3";

/// Deployment-specific parts of the customer note.
///
/// ```toml
/// provider_name = "vCom"
/// support_phone = "800-804-8266 opt 3"
/// emphasis = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteConfig {
    pub provider_name: String,
    pub support_phone: String,
    /// Wrap interpolated values in markdown bold.
    pub emphasis: bool,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            support_phone: DEFAULT_SUPPORT_PHONE.to_string(),
            emphasis: true,
        }
    }
}

impl NoteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: NoteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.provider_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "provider_name",
                message: "must not be blank".to_string(),
            });
        }
        if self.support_phone.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "support_phone",
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

pub fn render(fields: &ParsedFields) -> String {
    render_with(fields, &NoteConfig::default())
}

pub fn render_with(fields: &ParsedFields, config: &NoteConfig) -> String {
    let em = |value: &str| {
        if config.emphasis {
            format!("**{value}**")
        } else {
            value.to_string()
        }
    };
    let kind = format!("{} maintenance", fields.maintenance_type);

    format!(
        "Please be advised, {carrier} will be performing {kind} that will impact your service at location {address}.\n\
         \n\
         Your {provider} provided circuit {reference} will be subject to an outage lasting {duration} during this maintenance window (Please note this is an estimate and no guarantee of actual impact). This maintenance is for {reason}\n\
         \n\
         Start time: {start}  \n\
         End time: {end}  \n\
         \n\
         If you experience service issues after that window, you may need to reboot your equipment. If you continue to have any problems, call our toll-free Technical Support number {phone}, and refer to this ticket for further assistance.\n\
         \n\
         Thank you.",
        carrier = em(&fields.carrier),
        kind = em(&kind),
        address = em(&fields.address),
        provider = config.provider_name,
        reference = em(&fields.reference_id),
        duration = em(&fields.time_length),
        reason = em(&fields.reason),
        start = em(&fields.start_time),
        end = em(&fields.end_time),
        phone = config.support_phone,
    )
}
