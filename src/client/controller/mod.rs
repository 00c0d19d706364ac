//! Drives [`PassportState`] through the passport's user flows.
//!
//! The controller owns no I/O of its own: HTTP goes through [`PassportApi`] and the remembered
//! game path through [`PathStore`], so the flows can run against fakes in tests.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    client::{
        store::passport::{LogbookView, PassportPage, PassportState},
        util::format::cache_busted,
    },
    model::{
        api::SetGamePathResponse,
        pilot::{PilotDto, PilotStatsDto, ServiceRecordDto, SortieDto},
    },
};

pub static EMPTY_PATH_MESSAGE: &str = "Please enter the game folder path.";
pub static STORED_PATH_INVALID_MESSAGE: &str =
    "Stored game path is no longer valid. Please re-enter.";
pub static UNKNOWN_PATH_ERROR_MESSAGE: &str = "Unknown error. Please check your folder.";
pub static BACKEND_UNREACHABLE_MESSAGE: &str = "Could not connect to backend.";
pub static MALFORMED_ROSTER_MESSAGE: &str =
    "Unexpected response from backend. Please verify your IL-2 folder.";
pub static NO_PILOTS_MESSAGE: &str =
    "No pilots found in that installation. Verify the folder contains valid pilot data.";
pub static ROSTER_UNAVAILABLE_MESSAGE: &str =
    "Unable to connect to server or no valid game path.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The backend answered with a non-success status
    #[error("Request failed with status {0}")]
    Status(u16),
    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Result of asking the backend for the roster
#[derive(Debug, Clone, PartialEq)]
pub enum PilotRoster {
    Pilots(Vec<PilotDto>),
    /// The backend answered with JSON that is not a pilot list
    Malformed,
}

/// HTTP seam of the passport backend.
#[allow(async_fn_in_trait)]
pub trait PassportApi {
    /// `POST /api/set_game_path`; the body is read whatever the status
    async fn set_game_path(&self, game_path: &str) -> Result<SetGamePathResponse, ApiError>;
    /// `GET /api/pilots`
    async fn pilots(&self) -> Result<PilotRoster, ApiError>;
    /// `GET /api/service_record`
    async fn service_record(&self, desc: &str) -> Result<ServiceRecordDto, ApiError>;
    /// `GET /api/pilot_stats`
    async fn pilot_stats(&self, desc: &str) -> Result<PilotStatsDto, ApiError>;
    /// `GET /api/pilot_sorties`; `None` when the body is not a list
    async fn pilot_sorties(&self, desc: &str) -> Result<Option<Vec<SortieDto>>, ApiError>;
    /// `POST /api/save_photo`; the stored photo's path when the backend returned one
    async fn save_photo(&self, desc: &str, img_data: &str) -> Result<Option<String>, ApiError>;
    /// `POST /api/ping`
    async fn ping(&self) -> Result<(), ApiError>;
}

/// Persistent key-value slot holding the last accepted game path.
#[allow(async_fn_in_trait)]
pub trait PathStore {
    async fn load(&self) -> Option<String>;
    async fn save(&self, game_path: &str);
    async fn clear(&self);
}

/// Shared, mutable handle to the view state.
pub trait StateCell {
    fn with<R>(&self, f: impl FnOnce(&PassportState) -> R) -> R;
    fn with_mut<R>(&self, f: impl FnOnce(&mut PassportState) -> R) -> R;
}

impl StateCell for Signal<PassportState> {
    fn with<R>(&self, f: impl FnOnce(&PassportState) -> R) -> R {
        f(&self.read())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut PassportState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

#[derive(Clone)]
pub struct PassportController<B, S, C> {
    api: B,
    store: S,
    state: C,
}

impl<B, S, C> PassportController<B, S, C>
where
    B: PassportApi,
    S: PathStore,
    C: StateCell,
{
    /// Creates a new instance of [`PassportController`]
    pub fn new(api: B, store: S, state: C) -> Self {
        Self { api, store, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    fn current_desc(&self) -> Option<String> {
        self.state
            .with(|state| state.selected_pilot().map(|pilot| pilot.desc.clone()))
    }

    fn is_current(&self, desc: &str) -> bool {
        self.current_desc().as_deref() == Some(desc)
    }

    /// Opens the game path prompt pre-filled with the stored path
    async fn show_modal(&self, error: Option<&str>) {
        let stored = self.store.load().await.unwrap_or_default();

        self.state.with_mut(|state| {
            state.modal.open = true;
            state.modal.input = stored;
            state.modal.error = error.map(str::to_string);
        });
    }

    fn hide_modal(&self) {
        self.state.with_mut(|state| {
            state.modal.open = false;
            state.modal.error = None;
        });
    }

    /// Page load: with a stored path, loads the roster while re-validating the path; without
    /// one, asks for it.
    pub async fn start(&self) {
        match self.store.load().await {
            Some(game_path) => {
                futures::join!(self.fetch_pilots(), self.revalidate(&game_path));
            }
            None => self.show_modal(None).await,
        }
    }

    /// Re-submits the stored path; only a definite rejection forgets it.
    async fn revalidate(&self, game_path: &str) {
        match self.api.set_game_path(game_path).await {
            Ok(response) if response.ok => self.hide_modal(),
            Ok(_) => {
                self.store.clear().await;
                self.show_modal(Some(STORED_PATH_INVALID_MESSAGE)).await;
                self.state.with_mut(PassportState::clear_record);
            }
            Err(e) => {
                tracing::warn!(
                    "Background game path validation failed, keeping stored path: {}",
                    e
                );
            }
        }
    }

    /// Updates the prompt's input as the user types
    pub fn set_path_input(&self, input: String) {
        self.state.with_mut(|state| state.modal.input = input);
    }

    /// Submits the prompt's path to the backend
    pub async fn submit_game_path(&self) {
        let game_path = self
            .state
            .with(|state| state.modal.input.trim().to_string());

        if game_path.is_empty() {
            self.state
                .with_mut(|state| state.modal.error = Some(EMPTY_PATH_MESSAGE.to_string()));
            return;
        }

        match self.api.set_game_path(&game_path).await {
            Ok(response) if response.ok => {
                self.store.save(&game_path).await;
                self.hide_modal();
                self.fetch_pilots().await;
            }
            Ok(response) => {
                self.store.clear().await;
                let message = response
                    .error
                    .unwrap_or_else(|| UNKNOWN_PATH_ERROR_MESSAGE.to_string());
                self.state.with_mut(|state| {
                    state.modal.error = Some(message);
                    state.clear_record();
                });
            }
            Err(e) => {
                tracing::warn!("Failed to submit game path: {}", e);
                self.state.with_mut(|state| {
                    state.modal.error = Some(BACKEND_UNREACHABLE_MESSAGE.to_string());
                    state.clear_record();
                });
            }
        }
    }

    /// Loads the roster and selects its first pilot.
    ///
    /// Only a failed request forgets the stored path; an empty or malformed roster keeps it.
    pub async fn fetch_pilots(&self) {
        self.state.with_mut(|state| {
            state.roster_loading = true;
            state.pilots.clear();
            state.selected = None;
        });

        let roster = self.api.pilots().await;
        self.state.with_mut(|state| state.roster_loading = false);

        match roster {
            Ok(PilotRoster::Pilots(pilots)) if !pilots.is_empty() => {
                tracing::debug!(count = pilots.len(), "Loaded pilot roster");
                self.hide_modal();
                self.state.with_mut(|state| state.pilots = pilots);
                self.select_pilot(0).await;
            }
            Ok(PilotRoster::Pilots(_)) => {
                self.show_modal(Some(NO_PILOTS_MESSAGE)).await;
                self.state.with_mut(PassportState::clear_record);
            }
            Ok(PilotRoster::Malformed) => {
                self.show_modal(Some(MALFORMED_ROSTER_MESSAGE)).await;
                self.state.with_mut(PassportState::clear_record);
            }
            Err(e) => {
                tracing::error!("Failed to load pilots: {}", e);
                self.store.clear().await;
                self.show_modal(Some(ROSTER_UNAVAILABLE_MESSAGE)).await;
                self.state.with_mut(PassportState::clear_record);
            }
        }
    }

    /// Selects the roster entry at `index`, loads its record and returns to the record page
    pub async fn select_pilot(&self, index: usize) {
        let desc = self.state.with_mut(|state| {
            state.selected = (index < state.pilots.len()).then_some(index);
            state.page = PassportPage::Record;
            state.stats = None;
            state.logbook = LogbookView::Idle;
            state.selected_pilot().map(|pilot| pilot.desc.clone())
        });

        let Some(desc) = desc else {
            self.state.with_mut(PassportState::clear_record);
            return;
        };

        let record = self.api.service_record(&desc).await;
        if !self.is_current(&desc) {
            return;
        }

        match record {
            Ok(record) => {
                let photo_src = record
                    .pilot_info
                    .photo_url
                    .as_deref()
                    .filter(|url| !url.is_empty())
                    .map(cache_busted);
                self.state.with_mut(|state| {
                    state.record = Some(record);
                    state.photo_src = photo_src;
                });
            }
            Err(e) => {
                tracing::warn!("Failed to load service record: {}", e);
                self.state.with_mut(PassportState::clear_record);
            }
        }
    }

    /// Switches view; the stats and logbook views re-fetch on every entry
    pub async fn show_page(&self, page: PassportPage) {
        self.state.with_mut(|state| state.page = page);

        let Some(desc) = self.current_desc() else {
            return;
        };

        match page {
            PassportPage::Record => {}
            PassportPage::Stats => {
                let stats = self.api.pilot_stats(&desc).await;
                if !self.is_current(&desc) {
                    return;
                }

                match stats {
                    Ok(stats) => self.state.with_mut(|state| state.stats = Some(stats)),
                    Err(e) => tracing::warn!("Failed to load pilot stats: {}", e),
                }
            }
            PassportPage::Logbook => {
                self.state
                    .with_mut(|state| state.logbook = LogbookView::Loading);

                let sorties = self.api.pilot_sorties(&desc).await;
                if !self.is_current(&desc) {
                    return;
                }

                let logbook = match sorties {
                    Ok(Some(sorties)) if !sorties.is_empty() => LogbookView::Sorties(sorties),
                    Ok(_) => LogbookView::Empty,
                    Err(e) => {
                        tracing::error!("Failed to load logbook: {}", e);
                        LogbookView::Failed
                    }
                };
                self.state.with_mut(|state| state.logbook = logbook);
            }
        }
    }

    pub async fn next_page(&self) {
        if let Some(page) = self.state.with(|state| state.page.next()) {
            self.show_page(page).await;
        }
    }

    pub async fn prev_page(&self) {
        if let Some(page) = self.state.with(|state| state.page.prev()) {
            self.show_page(page).await;
        }
    }

    /// Shows the crop dialog
    pub fn open_cropper(&self) {
        self.state.with_mut(|state| state.cropper_open = true);
    }

    /// Hides the crop dialog without saving
    pub fn cancel_crop(&self) {
        self.state.with_mut(|state| state.cropper_open = false);
    }

    /// Stores a cropped photo for the selected pilot, or only shows it when none is selected
    pub async fn save_cropped_photo(&self, img_data: String) {
        match self.current_desc() {
            Some(desc) => match self.api.save_photo(&desc, &img_data).await {
                Ok(Some(path)) if self.is_current(&desc) => {
                    self.state
                        .with_mut(|state| state.photo_src = Some(cache_busted(&path)));
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Failed to save pilot photo: {}", e),
            },
            None => self.state.with_mut(|state| state.photo_src = Some(img_data)),
        }

        self.cancel_crop();
    }

    /// Tells the backend the page is still open; failures are ignored
    pub async fn ping(&self) {
        if let Err(e) = self.api.ping().await {
            tracing::debug!("Ping failed: {}", e);
        }
    }
}
