//! SeaORM models for the tables of an IL-2 Sturmovik career database (`cp.db`).
//!
//! The schema belongs to the game; these models only describe the columns the
//! passport reads. Tests use them to create a compatible database.

pub mod prelude;

pub mod career;
pub mod event;
pub mod mission;
pub mod pilot;
pub mod sortie;
pub mod squadron;
