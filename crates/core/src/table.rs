//! Samples table: template-driven column layout and client-side view state
//! (filter, sort, pagination) over the server-rendered dataset.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rows shown per page.
pub const PAGE_LENGTH: usize = 25;

/// Placeholder for the table's filter box.
pub const SEARCH_PLACEHOLDER: &str = "Search by sample ID, panel, status or user";

// ---------------------------------------------------------------------------
// Template discriminator
// ---------------------------------------------------------------------------

/// Selects which page layout (and thus column count) is active. The known
/// discriminators are `worksheet` and `user`; anything else takes the
/// six-column shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    Worksheet,
    #[default]
    User,
    Other,
}

impl Template {
    pub fn from_name(name: &str) -> Self {
        match name {
            "worksheet" => Self::Worksheet,
            "user" => Self::User,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

// ---------------------------------------------------------------------------
// Dataset rows
// ---------------------------------------------------------------------------

/// One pre-rendered sample analysis row from the backend dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SampleRow {
    pub pk: String,
    pub sample: String,
    pub worksheet: String,
    pub run: String,
    pub panel: String,
    pub status: String,
    pub assigned: String,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the server-rendered dataset backing the table.
pub fn load_dataset(path: &Path) -> Result<Vec<SampleRow>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Which row field a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Worksheet,
    Sample,
    Panel,
    Status,
    Assigned,
    Actions,
}

impl ColumnField {
    /// Cell text for this column, read straight off the row.
    pub fn value(self, row: &SampleRow) -> &str {
        match self {
            Self::Worksheet => &row.worksheet,
            Self::Sample => &row.sample,
            Self::Panel => &row.panel,
            Self::Status => &row.status,
            Self::Assigned => &row.assigned,
            Self::Actions => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub field: ColumnField,
    pub orderable: bool,
}

// The worksheet view omits its own worksheet column, so it carries a fixed
// five-column layout; every other view gets six. The table refuses to render
// when the declared column count differs from the markup, hence per-template
// constants rather than a computed list.
static WORKSHEET_COLUMNS: [Column; 5] = [
    Column { label: "Sample", field: ColumnField::Sample, orderable: true },
    Column { label: "Panel", field: ColumnField::Panel, orderable: true },
    Column { label: "Status", field: ColumnField::Status, orderable: true },
    Column { label: "Assigned to", field: ColumnField::Assigned, orderable: true },
    Column { label: "Actions", field: ColumnField::Actions, orderable: false },
];

static GENERAL_COLUMNS: [Column; 6] = [
    Column { label: "Worksheet", field: ColumnField::Worksheet, orderable: true },
    Column { label: "Sample", field: ColumnField::Sample, orderable: true },
    Column { label: "Panel", field: ColumnField::Panel, orderable: true },
    Column { label: "Status", field: ColumnField::Status, orderable: true },
    Column { label: "Assigned to", field: ColumnField::Assigned, orderable: true },
    Column { label: "Actions", field: ColumnField::Actions, orderable: false },
];

/// Column layout for a template. The last column is never sortable.
pub fn columns_for(template: Template) -> &'static [Column] {
    match template {
        Template::Worksheet => &WORKSHEET_COLUMNS,
        _ => &GENERAL_COLUMNS,
    }
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Client-side view state over the pre-rendered dataset. Server order is
/// preserved until the user sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub sort: Option<(usize, SortDir)>,
    pub filter: String,
    pub page: usize,
}

impl TableState {
    /// Sort by a column, toggling ascending to descending on repeat clicks.
    /// Non-orderable columns are ignored.
    pub fn toggle_sort(&mut self, col: usize, columns: &[Column]) {
        if !columns.get(col).is_some_and(|c| c.orderable) {
            return;
        }
        self.sort = match self.sort {
            Some((current, SortDir::Asc)) if current == col => Some((col, SortDir::Desc)),
            _ => Some((col, SortDir::Asc)),
        };
        self.page = 0;
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.page = 0;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next_page(&mut self, page_count: usize) {
        if self.page + 1 < page_count {
            self.page += 1;
        }
    }

    /// Compute the rows visible on the current page, after filter and sort.
    pub fn view(&self, rows: &[SampleRow], columns: &[Column]) -> TableView {
        let needle = self.filter.trim().to_lowercase();
        let mut selected: Vec<&SampleRow> = rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || columns
                        .iter()
                        .any(|col| col.field.value(row).to_lowercase().contains(&needle))
            })
            .collect();

        if let Some((col, dir)) = self.sort {
            if let Some(column) = columns.get(col).filter(|c| c.orderable) {
                // stable sort keeps the server order among equal keys
                selected.sort_by(|a, b| {
                    let ord = column
                        .field
                        .value(a)
                        .to_lowercase()
                        .cmp(&column.field.value(b).to_lowercase());
                    match dir {
                        SortDir::Asc => ord,
                        SortDir::Desc => ord.reverse(),
                    }
                });
            }
        }

        let filtered = selected.len();
        let page_count = filtered.div_ceil(PAGE_LENGTH);
        let page = if page_count == 0 { 0 } else { self.page.min(page_count - 1) };
        let start = page * PAGE_LENGTH;
        let shown: Vec<SampleRow> = selected
            .iter()
            .skip(start)
            .take(PAGE_LENGTH)
            .map(|row| (*row).clone())
            .collect();
        let first = if shown.is_empty() { 0 } else { start + 1 };
        let last = start + shown.len();

        TableView {
            rows: shown,
            page,
            page_count,
            filtered,
            total: rows.len(),
            first,
            last,
        }
    }
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<SampleRow>,
    pub page: usize,
    pub page_count: usize,
    pub filtered: usize,
    pub total: usize,
    /// 1-based index of the first shown row, 0 when the page is empty.
    pub first: usize,
    pub last: usize,
}

impl TableView {
    /// "Showing 1 to 25 of 57 entries", with a filter suffix when narrowed.
    pub fn info_line(&self) -> String {
        let mut line = format!(
            "Showing {} to {} of {} entries",
            self.first, self.last, self.filtered
        );
        if self.filtered != self.total {
            line.push_str(&format!(" (filtered from {} total entries)", self.total));
        }
        line
    }
}
