//! Server application core modules.
//!
//! This module contains all server-side functionality for the passport application: loading
//! configuration, opening the game's career database, reading pilot records, statistics, and
//! sorties from it, persisting pilot photos, and serving the HTTP API together with the static
//! game artwork the client displays.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
