//! Test fixtures for the pilot passport.
//!
//! [`TestBuilder`] lays out a throwaway game installation in a temporary directory: a career
//! database at `<game>/data/Career/cp.db` with every table the passport reads, plus the static
//! artwork and locale files the asset lookups expect.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestError, TestSetup};
}
