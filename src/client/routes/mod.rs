pub mod not_found;
pub mod passport;

pub use not_found::NotFound;
pub use passport::Passport;
