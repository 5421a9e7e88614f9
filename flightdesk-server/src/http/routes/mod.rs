//! Route handlers organized by resource

pub mod departures;
pub mod flight_duration;
pub mod health;
pub mod tickets;
