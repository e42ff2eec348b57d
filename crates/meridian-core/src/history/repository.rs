//! Conversion history persistence trait.

use super::model::HistoryLedger;
use crate::error::Result;

/// Repository for the conversion history ledger.
///
/// Same contract as the favorites repository: loads recover silently to the
/// empty ledger, saves replace the document atomically and surface failures.
/// The two collections are stored independently, so a corrupt history
/// document can never affect favorites.
pub trait HistoryRepository {
    /// Loads the ledger, or the empty ledger when nothing usable is stored.
    fn load(&self) -> HistoryLedger;

    /// Persists the full ledger, replacing the previous document.
    fn save(&self, history: &HistoryLedger) -> Result<()>;
}
