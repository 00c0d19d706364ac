pub use super::career::Entity as Career;
pub use super::event::Entity as Event;
pub use super::mission::Entity as Mission;
pub use super::pilot::Entity as Pilot;
pub use super::sortie::Entity as Sortie;
pub use super::squadron::Entity as Squadron;
