mod postgres;
mod sqlite;

pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

use crate::domain::{Feeding, MilkKind};
use async_trait::async_trait;
use bigdecimal::BigDecimal;

/// Weight seeded into a fresh store and assumed when the row is absent.
pub const DEFAULT_WEIGHT_KG: &str = "4.5";

/// One interface over the local database file and the remote hosted table
/// store; the backend is picked once at startup from configuration.
#[async_trait]
pub trait Store: Send + Sync {
    /// Current tracked weight in kilograms. A stored value that does not
    /// parse as a decimal surfaces as a decode error (the setting is written
    /// without validation).
    async fn get_weight(&self) -> Result<BigDecimal, sqlx::Error>;

    /// Overwrites the weight setting with whatever text was submitted.
    async fn set_weight(&self, value: &str) -> Result<(), sqlx::Error>;

    /// Entries whose date column equals `date` exactly (raw string
    /// comparison, no timezone normalization), newest id first.
    async fn list_entries_on(&self, date: &str) -> Result<Vec<Feeding>, sqlx::Error>;

    /// Inserts a new entry and returns its store-assigned id.
    async fn create_entry(
        &self,
        amount: i64,
        kind: MilkKind,
        time: &str,
        date: &str,
    ) -> Result<i64, sqlx::Error>;

    /// Removes the entry if present; deleting an unknown id is a no-op.
    async fn delete_entry(&self, id: i64) -> Result<(), sqlx::Error>;
}

fn parse_weight(raw: &str) -> Result<BigDecimal, sqlx::Error> {
    raw.parse::<BigDecimal>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn parse_kind(raw: &str) -> Result<MilkKind, sqlx::Error> {
    raw.parse::<MilkKind>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
