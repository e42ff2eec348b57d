//! Conversion history domain model.

use serde::{Deserialize, Serialize};

/// One recorded conversion. Immutable once created.
///
/// `timestamp` is the wall time at which the conversion was performed,
/// distinct from `from_time`/`to_time`, which are the converted values
/// themselves. All fields use the engine's fixed timestamp pattern and the
/// serde names below are the persisted document keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Wall time the conversion was performed
    pub timestamp: String,
    /// Source zone identifier
    pub from_zone: String,
    /// Target zone identifier
    pub to_zone: String,
    /// User-supplied source time
    pub from_time: String,
    /// Computed target time
    pub to_time: String,
}

impl ConversionRecord {
    /// Renders the record as the human-readable block shared by export and
    /// on-screen display.
    pub fn render_block(&self) -> String {
        format!(
            "{} - Converted:\n  {} {}\n  → {} {}\n\n",
            self.timestamp, self.from_time, self.from_zone, self.to_time, self.to_zone
        )
    }
}

/// Append-ordered conversion history.
///
/// Storage order is append order (oldest first); display order is the
/// reverse. Serializes as a bare JSON array of records, the shape of the
/// persisted history document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    records: Vec<ConversionRecord>,
}

impl HistoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded conversions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in storage (chronological) order.
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    /// Appends a record at the chronological end.
    pub fn append(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Renders the full ledger in chronological order, one block per record.
    pub fn export_text(&self) -> String {
        self.records
            .iter()
            .map(ConversionRecord::render_block)
            .collect()
    }

    /// Renders the ledger most-recent-first, one block per record.
    pub fn render_for_display(&self) -> Vec<String> {
        self.records
            .iter()
            .rev()
            .map(ConversionRecord::render_block)
            .collect()
    }
}
