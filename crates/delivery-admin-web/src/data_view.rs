//! Generic data view: records and column descriptors in, a grid of cells out
//!
//! Projection is pure. The view holds no state between calls and never
//! mutates the records it is given. A cell defaults to `record[column.key]`
//! unless a formatter supplies something richer for that column.

use delivery_admin_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Column descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Record field shown by default
    pub key: &'static str,
    /// Header text
    pub label: &'static str,
    /// Optional CSS width
    pub width: Option<&'static str>,
}

impl Column {
    /// Column without a fixed width
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            width: None,
        }
    }

    /// Set a CSS width such as `120px`
    #[must_use]
    pub const fn with_width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }
}

/// Visual tone of badges and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Green
    Success,
    /// Yellow
    Warning,
    /// Red
    Danger,
    /// Blue
    Info,
    /// Grey
    Neutral,
}

impl Tone {
    /// CSS modifier class
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "tone-success",
            Self::Warning => "tone-warning",
            Self::Danger => "tone-danger",
            Self::Info => "tone-info",
            Self::Neutral => "tone-neutral",
        }
    }
}

/// Row level operation offered in an actions cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Open a read-only detail panel
    View,
    /// Open the edit form
    Edit,
    /// Remove the record
    Delete,
    /// Flip the record between its two statuses
    ToggleStatus,
}

/// Button rendered in an actions cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    /// What the button does
    pub kind: ActionKind,
    /// Button text
    pub label: &'static str,
    /// Button tone
    pub tone: Tone,
}

impl RowAction {
    /// Build a row action
    #[must_use]
    pub const fn new(kind: ActionKind, label: &'static str, tone: Tone) -> Self {
        Self { kind, label, tone }
    }
}

/// Renderable content of one cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Plain text
    Text(String),
    /// Main line with a muted line underneath
    Stacked {
        /// Main line
        primary: String,
        /// Muted line
        secondary: String,
    },
    /// Colored status pill
    Badge {
        /// Pill text
        label: String,
        /// Pill tone
        tone: Tone,
    },
    /// Star rating with an optional note
    Rating {
        /// Formatted score
        score: String,
        /// Extra text such as a delivery count
        note: Option<String>,
    },
    /// Progress bar
    Progress {
        /// Text next to the bar
        label: String,
        /// Fill, 0 to 100
        percent: f64,
    },
    /// Row buttons
    Actions(Vec<RowAction>),
}

impl Cell {
    /// Plain text cell
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Two line cell
    pub fn stacked(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self::Stacked {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Status pill
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Stacked { primary, secondary } => write!(f, "{primary} {secondary}"),
            Self::Badge { label, .. } | Self::Progress { label, .. } => write!(f, "{label}"),
            Self::Rating { score, note } => match note {
                Some(note) => write!(f, "★ {score} {note}"),
                None => write!(f, "★ {score}"),
            },
            Self::Actions(actions) => {
                let labels: Vec<_> = actions.iter().map(|a| a.label).collect();
                write!(f, "{}", labels.join(" "))
            }
        }
    }
}

/// Per-cell formatter; `None` falls back to `record[column.key]`
pub type CellFormatter<T> = Arc<dyn Fn(&T, &Column) -> Option<Cell> + Send + Sync>;

/// One projected row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Position of the record in the projected slice
    pub index: usize,
    /// One cell per column
    pub cells: Vec<Cell>,
}

/// Projected grid
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Header columns
    pub columns: Vec<Column>,
    /// One row per record, in input order
    pub rows: Vec<TableRow>,
}

/// Column descriptors plus an optional cell formatter
pub struct DataView<T> {
    columns: Vec<Column>,
    formatter: Option<CellFormatter<T>>,
}

impl<T> Clone for DataView<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            formatter: self.formatter.clone(),
        }
    }
}

impl<T> fmt::Debug for DataView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataView")
            .field("columns", &self.columns)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl<T: Serialize> DataView<T> {
    /// View that shows raw field values
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            formatter: None,
        }
    }

    /// Attach a cell formatter
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&T, &Column) -> Option<Cell> + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Column descriptors
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Project records into a table: one row per record, one cell per column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a record needs default rendering and cannot
    /// be serialized.
    pub fn project(&self, records: &[T]) -> Result<Table> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mut fields: Option<Value> = None;
                let cells = self
                    .columns
                    .iter()
                    .map(|column| {
                        if let Some(cell) = self.formatter.as_ref().and_then(|f| f(record, column)) {
                            return Ok(cell);
                        }
                        if fields.is_none() {
                            fields = Some(serde_json::to_value(record).map_err(|e| {
                                Error::Render {
                                    message: format!("row {index}: {e}"),
                                }
                            })?);
                        }
                        Ok(Cell::Text(
                            fields
                                .as_ref()
                                .and_then(|value| value.get(column.key))
                                .map(display_value)
                                .unwrap_or_default(),
                        ))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(TableRow { index, cells })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Bar height in pixels for `value`, relative to the week's `peak`.
///
/// Values above the peak are clamped and an empty week draws no bars.
/// Counts come straight from the backend, so the scaling is done in 128 bits.
#[must_use]
pub fn bar_height(value: u64, peak: u64, max_px: u64) -> u64 {
    if peak == 0 {
        return 0;
    }
    let scaled = u128::from(value.min(peak)) * u128::from(max_px) / u128::from(peak);
    u64::try_from(scaled).unwrap_or(max_px)
}
