use std::fmt;

use serde::{Deserialize, Serialize};

use crate::window::MaintenanceWindow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceType {
    #[default]
    Scheduled,
    Emergency,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Scheduled => "scheduled",
            MaintenanceType::Emergency => "emergency",
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that fall back to a bracketed placeholder when nothing was extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Carrier,
    Address,
    ReferenceId,
    Reason,
    TicketNumber,
    TimeLength,
    StartTime,
    EndTime,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Carrier,
        Field::Address,
        Field::ReferenceId,
        Field::Reason,
        Field::TicketNumber,
        Field::TimeLength,
        Field::StartTime,
        Field::EndTime,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Carrier => "[Carrier Name]",
            Field::Address => "[Service Address]",
            Field::ReferenceId => "[Circuit ID]",
            Field::Reason => "[Maintenance Reason]",
            Field::TicketNumber => "[Ticket Number]",
            Field::TimeLength => "[Duration]",
            Field::StartTime => "[Start Time]",
            Field::EndTime => "[End Time]",
        }
    }

    /// Returns the extracted value, or this field's placeholder when it is empty.
    pub fn or_placeholder(&self, value: Option<String>) -> String {
        match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => self.placeholder().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidence {
    pub carrier: bool,
    pub address: bool,
    pub reference_id: bool,
    pub reason: bool,
    pub times: bool,
    pub ticket_number: bool,
}

impl Confidence {
    pub fn all_confident(&self) -> bool {
        self.low_confidence_fields().is_empty()
    }

    pub fn low_confidence_fields(&self) -> Vec<&'static str> {
        [
            ("carrier", self.carrier),
            ("address", self.address),
            ("referenceId", self.reference_id),
            ("reason", self.reason),
            ("times", self.times),
            ("ticketNumber", self.ticket_number),
        ]
        .into_iter()
        .filter(|(_, confident)| !confident)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Structured record extracted from one maintenance notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFields {
    pub carrier: String,
    pub address: String,
    pub reference_id: String,
    pub reason: String,
    pub maintenance_type: MaintenanceType,
    pub ticket_number: String,
    pub time_length: String,
    pub start_time: String,
    pub end_time: String,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<MaintenanceWindow>,
}

impl ParsedFields {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Carrier => &self.carrier,
            Field::Address => &self.address,
            Field::ReferenceId => &self.reference_id,
            Field::Reason => &self.reason,
            Field::TicketNumber => &self.ticket_number,
            Field::TimeLength => &self.time_length,
            Field::StartTime => &self.start_time,
            Field::EndTime => &self.end_time,
        }
    }

    pub fn is_placeholder(&self, field: Field) -> bool {
        self.value(field) == field.placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_type_defaults_to_scheduled() {
        assert_eq!(MaintenanceType::default(), MaintenanceType::Scheduled);
        assert_eq!(MaintenanceType::Emergency.to_string(), "emergency");
        assert_eq!(MaintenanceType::Scheduled.as_str(), "scheduled");
    }

    #[test]
    fn blank_values_become_placeholders() {
        assert_eq!(Field::Carrier.or_placeholder(None), "[Carrier Name]");
        assert_eq!(
            Field::ReferenceId.or_placeholder(Some("   ".to_string())),
            "[Circuit ID]"
        );
        assert_eq!(
            Field::Reason.or_placeholder(Some("fiber splice".to_string())),
            "fiber splice"
        );
    }

    #[test]
    fn low_confidence_fields_are_listed_in_order() {
        let confidence = Confidence {
            carrier: true,
            address: false,
            reference_id: true,
            reason: true,
            times: false,
            ticket_number: true,
        };
        assert_eq!(confidence.low_confidence_fields(), vec!["address", "times"]);
        assert!(!confidence.all_confident());
    }
}
