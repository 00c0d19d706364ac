pub mod assets;
pub mod career;
pub mod factory;
