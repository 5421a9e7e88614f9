//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod location;
pub mod schedule;
pub mod validation;

pub use location::{LocationCode, RouteParams, RoutePair};
pub use schedule::{split_timestamp, ScheduleStamp};
pub use validation::ValidationError;
