pub mod cropper_modal;
pub mod game_path_modal;
pub mod logbook;
pub mod navbar;
pub mod page;
pub mod page_arrows;
pub mod pilot_select;
pub mod service_record;
pub mod stats_page;

pub use cropper_modal::CropperModal;
pub use game_path_modal::GamePathModal;
pub use logbook::Logbook;
pub use navbar::Navbar;
pub use page::Page;
pub use page_arrows::PageArrows;
pub use pilot_select::PilotSelect;
pub use service_record::ServiceRecord;
pub use stats_page::StatsPage;
