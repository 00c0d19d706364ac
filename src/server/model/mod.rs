//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler, the handle to
//! the currently opened career database, and the liveness tracker fed by client pings.

pub mod app;
pub mod career;
pub mod liveness;
