// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cml.
//!
//! This module handles discovering, loading, and parsing configuration
//! from TOML files, with built-in defaults when no file is present.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, load_config, parse_config};
pub use schema::*;
