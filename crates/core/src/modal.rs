//! Confirmation modals: per-dialog context subsets relayed from a clicked
//! row into read-only display fields plus a hidden form input. Pure data
//! relay, no client-side validation.

use crate::table::SampleRow;

// ---------------------------------------------------------------------------
// Dialog registry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Unassign,
    Reopen,
    Check,
}

impl ModalKind {
    pub const ALL: [ModalKind; 3] = [ModalKind::Unassign, ModalKind::Reopen, ModalKind::Check];

    /// Root element id of the dialog.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Unassign => "unassign-modal",
            Self::Reopen => "reopen-modal",
            Self::Check => "check-modal",
        }
    }

    /// Id of the hidden form input carrying the record id to the backend.
    pub fn hidden_input_id(self) -> &'static str {
        match self {
            Self::Unassign => "id_unassign",
            Self::Reopen => "id_reopen_analysis",
            Self::Check => "id_sample",
        }
    }

    /// Form field name behind the hidden input.
    pub fn hidden_input_name(self) -> &'static str {
        match self {
            Self::Unassign => "unassign",
            Self::Reopen => "reopen_analysis",
            Self::Check => "sample",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Unassign => "Unassign sample",
            Self::Reopen => "Reopen analysis",
            Self::Check => "Paperwork check",
        }
    }

    /// Label for the row button that opens this dialog.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Unassign => "Unassign",
            Self::Reopen => "Reopen",
            Self::Check => "Check",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Unassign => "Unassign",
            Self::Reopen => "Reopen",
            Self::Check => "Confirm check",
        }
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// One read-only display field inside a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalField {
    /// Class of the display element in the rendered tree, e.g. `modal-sample`.
    pub class: &'static str,
    pub label: &'static str,
    pub value: String,
}

fn field(class: &'static str, label: &'static str, value: &str) -> ModalField {
    ModalField { class, label, value: value.to_string() }
}

/// Everything one open of a dialog shows: the display fields and the record
/// id for the hidden input. Built fresh from the triggering row on every
/// open, so nothing leaks between openings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContext {
    pub kind: ModalKind,
    pub record_id: String,
    pub fields: Vec<ModalField>,
}

impl ModalContext {
    pub fn from_row(kind: ModalKind, row: &SampleRow) -> Self {
        let fields = match kind {
            ModalKind::Unassign => vec![
                field("modal-sample", "Sample", &row.sample),
                field("modal-panel", "Panel", &row.panel),
                field("modal-status", "Status", &row.status),
                field("modal-assigned", "Assigned to", &row.assigned),
            ],
            ModalKind::Reopen => vec![
                field("modal-sample", "Sample", &row.sample),
                field("modal-panel", "Panel", &row.panel),
                field("modal-assigned", "Assigned to", &row.assigned),
            ],
            ModalKind::Check => vec![
                field("modal-pk", "Analysis", &row.pk),
                field("modal-sample", "Sample", &row.sample),
                field("modal-panel", "Panel", &row.panel),
                field("modal-ws", "Worksheet", &row.worksheet),
                field("modal-run", "Run", &row.run),
            ],
        };
        Self { kind, record_id: row.pk.clone(), fields }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Dialog lifecycle: Closed until triggered, Open while populated, back to
/// Closed on dismiss. Re-opening fully repopulates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContext),
}

impl ModalState {
    pub fn open(&mut self, context: ModalContext) {
        *self = Self::Open(context);
    }

    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
