//! E-sports Tournament Registration API Library
//!
//! This library provides the registration core (teams, players and the
//! roster cap), its in-memory store, admin authentication, and the HTTP
//! adapter that exposes them.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
