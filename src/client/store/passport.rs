//! View state of the passport page.

use crate::model::pilot::{PilotDto, PilotStatsDto, ServiceRecordDto, SortieDto};

/// The three views of the passport, in navigation order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassportPage {
    #[default]
    Record,
    Stats,
    Logbook,
}

impl PassportPage {
    pub fn index(self) -> usize {
        match self {
            Self::Record => 0,
            Self::Stats => 1,
            Self::Logbook => 2,
        }
    }

    /// Page after this one, `None` on the last page
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Record => Some(Self::Stats),
            Self::Stats => Some(Self::Logbook),
            Self::Logbook => None,
        }
    }

    /// Page before this one, `None` on the first page
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Record => None,
            Self::Stats => Some(Self::Record),
            Self::Logbook => Some(Self::Stats),
        }
    }
}

/// Game path prompt shown until the backend accepts an installation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GamePathModal {
    pub open: bool,
    pub input: String,
    pub error: Option<String>,
}

/// State of the logbook view
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LogbookView {
    #[default]
    Idle,
    Loading,
    Sorties(Vec<SortieDto>),
    Empty,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassportState {
    pub modal: GamePathModal,
    /// Roster in backend order; the selector addresses pilots by index
    pub pilots: Vec<PilotDto>,
    pub roster_loading: bool,
    pub selected: Option<usize>,
    pub page: PassportPage,
    pub record: Option<ServiceRecordDto>,
    /// Photo currently shown, already cache-busted; `None` shows the sample photo
    pub photo_src: Option<String>,
    pub stats: Option<PilotStatsDto>,
    pub logbook: LogbookView,
    pub cropper_open: bool,
}

impl PassportState {
    /// The selected pilot, if the selection points into the roster
    pub fn selected_pilot(&self) -> Option<&PilotDto> {
        self.selected.and_then(|index| self.pilots.get(index))
    }

    /// Blanks the record, photo, stats and logbook
    pub fn clear_record(&mut self) {
        self.record = None;
        self.photo_src = None;
        self.stats = None;
        self.logbook = LogbookView::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_stop_at_the_ends() {
        assert_eq!(PassportPage::Record.prev(), None);
        assert_eq!(PassportPage::Record.next(), Some(PassportPage::Stats));
        assert_eq!(PassportPage::Logbook.next(), None);
        assert_eq!(PassportPage::Logbook.prev(), Some(PassportPage::Stats));
        assert_eq!(PassportPage::Logbook.index(), 2);
    }

    #[test]
    fn selection_outside_roster_is_none() {
        let state = PassportState {
            pilots: vec![PilotDto::default()],
            selected: Some(3),
            ..Default::default()
        };

        assert!(state.selected_pilot().is_none());
    }
}
