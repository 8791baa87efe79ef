//! Core value types shared across the engine.

pub mod coordinates;
pub mod schedule;
pub mod setup;
pub mod target;
pub mod window;

pub use coordinates::{EquatorialCoordinate, GeoLocation};
pub use schedule::{Candidate, MeridianFlip, ScheduleBlock};
pub use setup::ObservingSetup;
pub use target::TargetEntry;
pub use window::{NightBounds, NightWindow, SamplingStep};
