//! Configuration module
//!
//! Loads the TOML config file holding table defaults, display and logging
//! settings.

pub mod config;
