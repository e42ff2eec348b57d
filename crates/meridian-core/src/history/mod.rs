//! Conversion history: domain model and persistence trait.

pub mod model;
pub mod repository;

pub use model::{ConversionRecord, HistoryLedger};
pub use repository::HistoryRepository;
