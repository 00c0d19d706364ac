//! Service layer for business logic.
//!
//! Services combine the career database repositories with the static artwork catalog and the
//! passport's own files: accepting and restoring the game path, assembling pilot records, stats
//! and logbooks, storing pilot photos, and shutting the server down once the client is gone.

pub mod game_path;
pub mod liveness;
pub mod photo;
pub mod pilot;
