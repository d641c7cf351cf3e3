// Player domain module
// Contains the player entity registered under a team roster

#![allow(clippy::module_inception)]

pub mod player;

pub use player::{NewPlayer, Player};
