//! Dash Common – configuration and collaborator payloads shared by the
//! dashboard crates.

pub mod config;
pub mod protocol;
