//! Launch-time state and the UI-wide context types.
//!
//! Configuration is an explicit object built once at startup and handed to
//! each sub-behavior through context, never through ambient globals. Every
//! handler keeps its own locals; the only shared pieces are the per-dialog
//! signals and the notice stack below.

use std::path::Path;

use dioxus::prelude::*;
use thiserror::Error;

use labdash_core::config::{ConfigError, DashboardConfig};
use labdash_core::modal::{ModalKind, ModalState};
use labdash_core::table::{load_dataset, DatasetError, SampleRow};

/// Immutable snapshot loaded before launch: the configuration plus the
/// server-rendered dataset backing the table.
pub struct AppState {
    pub config: DashboardConfig,
    pub rows: Vec<SampleRow>,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl AppState {
    /// Load the configuration and the dataset it points at. Failures here
    /// abort startup with a readable message.
    pub fn load(config_path: &Path) -> Result<Self, StartupError> {
        let config = DashboardConfig::load(config_path)?;
        let rows = load_dataset(&config.dataset)?;
        tracing::info!(
            rows = rows.len(),
            template = ?config.template,
            badges = config.enabled_badges().len(),
            "dashboard state loaded"
        );
        Ok(Self { config, rows })
    }
}

// ---------------------------------------------------------------------------
// Dialog signals
// ---------------------------------------------------------------------------

/// One signal per dialog, provided via context so the table can open them
/// and the modal host can render them. Each dialog's state is disjoint.
#[derive(Clone, Copy)]
pub struct ModalStates {
    pub unassign: Signal<ModalState>,
    pub reopen: Signal<ModalState>,
    pub check: Signal<ModalState>,
}

impl ModalStates {
    pub fn new() -> Self {
        Self {
            unassign: Signal::new(ModalState::Closed),
            reopen: Signal::new(ModalState::Closed),
            check: Signal::new(ModalState::Closed),
        }
    }

    pub fn signal_for(&self, kind: ModalKind) -> Signal<ModalState> {
        match kind {
            ModalKind::Unassign => self.unassign,
            ModalKind::Reopen => self.reopen,
            ModalKind::Check => self.check,
        }
    }
}

// ---------------------------------------------------------------------------
// Failure notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Dismissible inline notices, newest last. Async failures land here instead
/// of blocking alert boxes.
#[derive(Clone, Copy)]
pub struct Notices {
    items: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(mut self, message: impl Into<String>) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.items.write().push(Notice { id, message: message.into() });
    }

    pub fn dismiss(mut self, id: u64) {
        self.items.write().retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> Vec<Notice> {
        self.items.read().clone()
    }
}
