use bigdecimal::BigDecimal;
use bottle_tally::domain::{MilkKind, daily_total};
use bottle_tally::store::{SqliteStore, Store};
use sqlx::sqlite::SqliteConnectOptions;
use tempfile::TempDir;

async fn fresh_store(dir: &TempDir) -> SqliteStore {
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("feedings.db"))
        .create_if_missing(true);
    SqliteStore::connect(options)
        .await
        .expect("failed to open the test store")
}

fn decimal(value: &str) -> BigDecimal {
    value.parse().unwrap()
}

#[tokio::test]
async fn entries_come_back_newest_id_first() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    let first = store
        .create_entry(60, MilkKind::Formula, "08:00", "2026-08-30")
        .await
        .unwrap();
    let second = store
        .create_entry(90, MilkKind::Breastmilk, "11:30", "2026-08-30")
        .await
        .unwrap();
    let third = store
        .create_entry(120, MilkKind::Formula, "14:05", "2026-08-30")
        .await
        .unwrap();
    assert!(first < second && second < third);

    let entries = store.list_entries_on("2026-08-30").await.unwrap();
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![third, second, first]);

    assert_eq!(entries[0].amount, 120);
    assert_eq!(entries[0].kind, MilkKind::Formula);
    assert_eq!(entries[0].time, "14:05");
    assert_eq!(entries[1].kind, MilkKind::Breastmilk);
}

#[tokio::test]
async fn prior_dates_are_excluded_from_the_listing() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    store
        .create_entry(100, MilkKind::Formula, "22:00", "2026-08-29")
        .await
        .unwrap();
    let today_id = store
        .create_entry(80, MilkKind::Formula, "07:15", "2026-08-30")
        .await
        .unwrap();

    let entries = store.list_entries_on("2026-08-30").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, today_id);
    assert_eq!(entries[0].date, "2026-08-30");
}

#[tokio::test]
async fn deleting_is_idempotent_and_total_drops_by_the_deleted_amount() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    store
        .create_entry(60, MilkKind::Formula, "08:00", "2026-08-30")
        .await
        .unwrap();
    let doomed = store
        .create_entry(90, MilkKind::Formula, "10:00", "2026-08-30")
        .await
        .unwrap();
    store
        .create_entry(120, MilkKind::Breastmilk, "12:00", "2026-08-30")
        .await
        .unwrap();

    let before = daily_total(&store.list_entries_on("2026-08-30").await.unwrap());
    assert_eq!(before, 270);

    store.delete_entry(doomed).await.unwrap();
    let entries = store.list_entries_on("2026-08-30").await.unwrap();
    assert!(entries.iter().all(|e| e.id != doomed));
    assert_eq!(daily_total(&entries), before - 90);

    // Second delete of the same id is a no-op, not an error.
    store.delete_entry(doomed).await.unwrap();
    assert_eq!(store.list_entries_on("2026-08-30").await.unwrap().len(), 2);
}

#[tokio::test]
async fn weight_is_seeded_and_can_be_overwritten() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    assert_eq!(store.get_weight().await.unwrap(), decimal("4.5"));

    store.set_weight("3.5").await.unwrap();
    assert_eq!(store.get_weight().await.unwrap(), decimal("3.5"));

    // Reconnecting must not reset the edited value to the seed.
    drop(store);
    let store = fresh_store(&dir).await;
    assert_eq!(store.get_weight().await.unwrap(), decimal("3.5"));
}

#[tokio::test]
async fn non_numeric_weight_is_stored_unchecked_and_fails_on_read() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    store.set_weight("four and a half").await.unwrap();
    assert!(store.get_weight().await.is_err());
}
