pub mod api;
pub mod pilot;
