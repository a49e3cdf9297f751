pub mod confidence;
pub mod duration;
pub mod errors;
pub mod extractors;
pub mod model;
mod pipeline;
mod registry;
pub mod render;
pub mod timezone;
pub mod window;

pub use errors::{ConfigError, WindowError};
pub use model::{Confidence, Field, MaintenanceType, ParsedFields};
pub use pipeline::{parse, parse_with_clock};
pub use registry::{extract_with_rules, Extraction, ExtractionRule};
pub use render::{render, render_with, NoteConfig};
pub use timezone::{ResolvedTimezone, TimezoneSource};
pub use window::{apply_rollover, Clock, FixedClock, MaintenanceWindow, SystemClock};
