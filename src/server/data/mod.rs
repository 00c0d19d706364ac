//! Data access layer.
//!
//! Repositories over the game's career database (`cp.db`), the passport's own settings file, and
//! the static artwork tree the game ships. The career database belongs to the game and is only
//! ever read.

pub mod assets;
pub mod career;
pub mod event;
pub mod mission;
pub mod pilot;
pub mod settings;
pub mod sortie;
pub mod squadron;
