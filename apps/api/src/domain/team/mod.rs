// Team domain module
// Contains the team entity, its name value object, and registration events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::{NewTeam, Team};
pub use value_objects::TeamName;
