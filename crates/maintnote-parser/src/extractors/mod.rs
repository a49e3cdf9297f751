mod address;
mod carrier;
mod common;
mod maintenance_type;
mod reason;
mod reference;
mod ticket;

pub use address::extract_address;
pub use carrier::{extract_carrier, CAPITALIZED_FALLBACK};
pub use maintenance_type::extract_maintenance_type;
pub use reason::extract_reason;
pub use reference::{extract_reference_id, CIRCUIT_SHAPES};
pub use ticket::extract_ticket_number;

pub(crate) use common::{compile, CaptureRule, FixedRule, FnRule, LineCaptureRule, ShapeRule};
