use super::{DEFAULT_WEIGHT_KG, Store, parse_kind, parse_weight};
use crate::domain::{Feeding, MilkKind};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Local backend: a single database file next to the binary, created on
/// first run.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens the database file and makes sure the schema and the seeded
    /// weight row exist.
    pub async fn connect(options: SqliteConnectOptions) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        sqlx::query(
            "create table if not exists feeds (
                 id integer primary key autoincrement,
                 amount integer not null,
                 type text not null,
                 time text not null,
                 date text not null
             )",
        )
        .execute(&pool)
        .await?;
        sqlx::query("create table if not exists settings (key text primary key, value text not null)")
            .execute(&pool)
            .await?;
        sqlx::query("insert or ignore into settings (key, value) values ('weight', ?)")
            .bind(DEFAULT_WEIGHT_KG)
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn get_weight(&self) -> Result<BigDecimal, sqlx::Error> {
        let row = sqlx::query("select value from settings where key = 'weight'")
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => parse_weight(&row.try_get::<String, _>("value")?),
            None => parse_weight(DEFAULT_WEIGHT_KG),
        }
    }

    async fn set_weight(&self, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query("update settings set value = ? where key = 'weight'")
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_entries_on(&self, date: &str) -> Result<Vec<Feeding>, sqlx::Error> {
        let rows =
            sqlx::query("select id, amount, type, time, date from feeds where date = ? order by id desc")
                .bind(date)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|row| {
                Ok(Feeding {
                    id: row.try_get("id")?,
                    amount: row.try_get("amount")?,
                    kind: parse_kind(&row.try_get::<String, _>("type")?)?,
                    time: row.try_get("time")?,
                    date: row.try_get("date")?,
                })
            })
            .collect()
    }

    async fn create_entry(
        &self,
        amount: i64,
        kind: MilkKind,
        time: &str,
        date: &str,
    ) -> Result<i64, sqlx::Error> {
        let row =
            sqlx::query("insert into feeds (amount, type, time, date) values (?, ?, ?, ?) returning id")
                .bind(amount)
                .bind(kind.as_str())
                .bind(time)
                .bind(date)
                .fetch_one(&self.pool)
                .await?;
        row.try_get("id")
    }

    async fn delete_entry(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("delete from feeds where id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
