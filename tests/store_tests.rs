use chrono::NaiveDate;
use evlogbook::codec::CsvMapping;
use evlogbook::config::Config;
use evlogbook::core::add::AddLogic;
use evlogbook::core::dashboard::summarize;
use evlogbook::core::del::DeleteLogic;
use evlogbook::core::edit::{EditLogic, EditOutcome};
use evlogbook::core::import::{ImportLogic, ImportOutcome};
use evlogbook::core::logic::Core;
use evlogbook::core::persist::{MemorySnapshotStore, SnapshotStore};
use evlogbook::core::store::{RecordStore, SeedOutcome, StoreOutcome};
use evlogbook::core::view::sort_records;
use evlogbook::db::snapshot::SqliteSnapshotStore;
use evlogbook::errors::{AppError, AppResult};
use evlogbook::models::{ChargeFields, Field, Record, RecordId};
use std::path::Path;

mod common;
use common::{SAMPLE_CSV, setup_test_db, temp_file};

fn session(date: &str, location: &str) -> ChargeFields {
    ChargeFields::new()
        .with(Field::Date, date)
        .with(Field::Location, location)
}

/// Loads fine, refuses every save.
struct FailingStore;

impl SnapshotStore for FailingStore {
    fn load(&self) -> AppResult<Option<Vec<Record>>> {
        Ok(None)
    }

    fn save(&mut self, _records: &[Record]) -> AppResult<()> {
        Err(AppError::Persistence("disk full".into()))
    }
}

#[test]
fn test_create_assigns_increasing_ids() {
    let mut store = RecordStore::in_memory();
    let a = store.create(session("2025-01-01", "A"));
    let b = store.create(session("2025-01-02", "B"));

    assert_eq!(a, RecordId(1));
    assert_eq!(b, RecordId(2));
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[1].fields.location, "B");
}

#[test]
fn test_update_replaces_only_target_record() {
    let mut store = RecordStore::in_memory();
    let a = store.create(session("2025-01-01", "A"));
    let b = store.create(session("2025-01-02", "B"));

    let outcome = store.update(a, session("2025-01-01", "A2"));

    assert!(outcome.is_applied());
    assert_eq!(store.get(a).map(|r| r.get(Field::Location)), Some("A2"));
    assert_eq!(store.get(b).map(|r| r.get(Field::Location)), Some("B"));
    assert_eq!(store.list()[0].id, a);
}

#[test]
fn test_update_and_remove_unknown_id() {
    let mut store = RecordStore::in_memory();
    store.create(session("2025-01-01", "A"));

    assert_eq!(store.update(RecordId(99), ChargeFields::new()), StoreOutcome::NotFound);
    assert_eq!(store.remove(RecordId(99)), StoreOutcome::NotFound);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_keeps_other_ids_and_never_reuses() {
    let mut store = RecordStore::in_memory();
    let a = store.create(session("2025-01-01", "A"));
    let b = store.create(session("2025-01-02", "B"));
    let c = store.create(session("2025-01-03", "C"));

    assert!(store.remove(b).is_applied());

    let ids: Vec<RecordId> = store.list().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a, c]);

    assert!(store.remove(c).is_applied());
    let d = store.create(session("2025-01-04", "D"));
    assert_eq!(d, RecordId(4));
}

#[test]
fn test_seed_only_into_empty_store() {
    let mut store = RecordStore::in_memory();

    assert_eq!(
        store.seed_from_csv(SAMPLE_CSV, CsvMapping::Positional),
        SeedOutcome::Seeded(2)
    );
    assert_eq!(
        store.seed_from_csv(SAMPLE_CSV, CsvMapping::Positional),
        SeedOutcome::AlreadyPopulated
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].fields.remarks, "slow, busy");
}

#[test]
fn test_seed_keeps_imported_derived_values() {
    let mut store = RecordStore::in_memory();
    let _ = store.seed_from_csv(SAMPLE_CSV, CsvMapping::Positional);

    // imported rows are stored as given, even where a recompute would differ
    assert_eq!(store.list()[0].fields.cost_per_energy, "0.43");
}

#[test]
fn test_seed_from_missing_source() {
    let mut store = RecordStore::in_memory();
    let outcome = store.seed_from_source(Path::new("/nonexistent/evlogbook/seed.csv"), CsvMapping::Positional);

    assert_eq!(outcome, SeedOutcome::SourceUnavailable);
    assert!(store.is_empty());
}

#[test]
fn test_seed_from_source_checks_emptiness_first() {
    let mut store = RecordStore::in_memory();
    store.create(session("2025-01-01", "A"));

    let outcome = store.seed_from_source(Path::new("/nonexistent/evlogbook/seed.csv"), CsvMapping::Positional);
    assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
}

#[test]
fn test_seed_header_only_document() {
    let mut store = RecordStore::in_memory();
    assert_eq!(store.seed_from_csv("Date,Location\n", CsvMapping::Positional), SeedOutcome::Seeded(0));
    assert!(store.is_empty());
}

#[test]
fn test_failed_save_keeps_change_in_memory() {
    let mut store = RecordStore::open(Box::new(FailingStore));
    let id = store.create(session("2025-01-01", "A"));

    assert_eq!(store.len(), 1);
    assert!(store.get(id).is_some());
    assert!(store.last_persist_error().is_some_and(|e| e.contains("disk full")));
}

#[test]
fn test_open_resumes_after_highest_id() {
    let payload = r#"[{"id":7,"Date":"2025-01-01","Bogus":"x"},{"id":3,"Location":"Work"}]"#;
    let mut store = RecordStore::open(Box::new(MemorySnapshotStore::with_payload(payload)));

    assert_eq!(store.len(), 2);
    let first = &store.list()[0];
    assert_eq!(first.id, RecordId(7));
    assert_eq!(first.fields.date, "2025-01-01");
    assert_eq!(first.fields.location, "");

    assert_eq!(store.create(ChargeFields::new()), RecordId(8));
}

#[test]
fn test_open_with_unreadable_snapshot_starts_empty() {
    let store = RecordStore::open(Box::new(MemorySnapshotStore::with_payload("not json")));
    assert!(store.is_empty());
    assert!(store.load_error().is_some());
}

#[test]
fn test_open_with_readable_snapshot_has_no_load_error() {
    let store = RecordStore::open(Box::new(MemorySnapshotStore::with_payload("[]")));
    assert!(store.is_empty());
    assert!(store.load_error().is_none());
}

fn test_config(db_path: &str, seed_file: &str) -> Config {
    Config {
        database: db_path.to_string(),
        storage_key: "ev_charge_records_v1".into(),
        seed_file: seed_file.to_string(),
        csv_mapping: CsvMapping::Positional,
        currency_symbol: "$".into(),
    }
}

fn stored_payload(db_path: &str) -> String {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT payload FROM snapshots WHERE key = 'ev_charge_records_v1'",
        [],
        |row| row.get(0),
    )
    .expect("payload row")
}

#[test]
fn test_unreadable_snapshot_is_not_overwritten_by_seed() {
    let db_path = setup_test_db("store_corrupt_no_seed");
    let seed = temp_file("store_corrupt_no_seed.csv", SAMPLE_CSV);

    let snapshots = SqliteSnapshotStore::open(&db_path, "ev_charge_records_v1").expect("open");
    assert!(!snapshots.exists().expect("exists"));
    drop(snapshots);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO snapshots (key, payload, updated_at) VALUES ('ev_charge_records_v1', 'not json', '')",
        [],
    )
    .expect("insert payload");
    drop(conn);

    let store = Core::open_store(&test_config(&db_path, &seed)).expect("open store");

    assert!(store.is_empty());
    assert!(store.load_error().is_some());
    assert_eq!(stored_payload(&db_path), "not json");
}

#[test]
fn test_empty_store_is_seeded_on_open() {
    let db_path = setup_test_db("store_seed_on_open");
    let seed = temp_file("store_seed_on_open.csv", SAMPLE_CSV);

    let store = Core::open_store(&test_config(&db_path, &seed)).expect("open store");
    assert_eq!(store.len(), 2);

    let snapshots = SqliteSnapshotStore::open(&db_path, "ev_charge_records_v1").expect("open");
    assert!(snapshots.exists().expect("exists"));
    assert!(stored_payload(&db_path).contains("\"Location\":\"Mall\""));
}

#[test]
fn test_memory_snapshot_is_written_on_every_change() {
    let mut snapshots = MemorySnapshotStore::new();
    assert!(snapshots.payload().is_none());

    let records = vec![Record::new(RecordId(1), session("2025-01-01", "A"))];
    snapshots.save(&records).expect("save");

    let payload = snapshots.payload().expect("payload");
    assert!(payload.contains("\"Date\":\"2025-01-01\""));
    assert!(payload.contains("\"id\":1"));
    assert_eq!(snapshots.load().expect("load"), Some(records));
}

#[test]
fn test_sqlite_snapshot_survives_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let snapshots = SqliteSnapshotStore::open(&db_path, "ev_charge_records_v1").expect("open");
        let mut store = RecordStore::open(Box::new(snapshots));
        store.create(session("2025-01-01", "A"));
        store.create(session("2025-01-02", "B"));
        assert!(store.remove(RecordId(1)).is_applied());
        assert!(store.last_persist_error().is_none());
    }

    let snapshots = SqliteSnapshotStore::open(&db_path, "ev_charge_records_v1").expect("reopen");
    let mut store = RecordStore::open(Box::new(snapshots));

    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].id, RecordId(2));
    assert_eq!(store.list()[0].fields.location, "B");
    assert_eq!(store.create(ChargeFields::new()), RecordId(3));
}

#[test]
fn test_sqlite_new_storage_key_sees_no_records() {
    let db_path = setup_test_db("store_key_switch");

    {
        let snapshots = SqliteSnapshotStore::open(&db_path, "ev_charge_records_v1").expect("open");
        let mut store = RecordStore::open(Box::new(snapshots));
        store.create(session("2025-01-01", "A"));
    }

    let snapshots = SqliteSnapshotStore::open(&db_path, "ev_charge_records_v2").expect("open v2");
    assert_eq!(snapshots.key(), "ev_charge_records_v2");
    assert_eq!(snapshots.other_keys().expect("keys"), vec!["ev_charge_records_v1".to_string()]);
    assert!(snapshots.load().expect("load").is_none());
}

#[test]
fn test_add_logic_recomputes_derived_fields() {
    let mut store = RecordStore::in_memory();
    let fields = session("2025-01-01", "A")
        .with(Field::StartingTime, "23:30")
        .with(Field::EndingTime, "00:15")
        .with(Field::Duration, "bogus");

    let id = AddLogic::apply(&mut store, fields);

    assert_eq!(store.get(id).map(|r| r.get(Field::Duration)), Some("0:45"));
}

#[test]
fn test_edit_logic_overlays_and_recomputes() {
    let mut store = RecordStore::in_memory();
    let id = AddLogic::apply(
        &mut store,
        session("2025-01-01", "A")
            .with(Field::StartingDistance, "100")
            .with(Field::EndingDistance, "200"),
    );

    let outcome = EditLogic::apply(&mut store, id, &[(Field::EndingDistance, "260".into())], false)
        .expect("edit");

    assert_eq!(outcome, EditOutcome::Updated(id));
    let record = store.get(id).expect("record");
    assert_eq!(record.get(Field::Location), "A");
    assert_eq!(record.get(Field::DistanceAdded), "160.00");
}

#[test]
fn test_edit_logic_missing_id() {
    let mut store = RecordStore::in_memory();

    let err = EditLogic::apply(&mut store, RecordId(5), &[], false).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(5)));

    let outcome = EditLogic::apply(&mut store, RecordId(5), &[(Field::Location, "New".into())], true)
        .expect("upsert");
    assert_eq!(outcome, EditOutcome::Created(RecordId(1)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_logic_missing_id() {
    let mut store = RecordStore::in_memory();
    let err = DeleteLogic::apply(&mut store, RecordId(1)).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(1)));
}

#[test]
fn test_import_logic_seed_then_replace() {
    let path = temp_file("store_import_sample.csv", SAMPLE_CSV);
    let path = Path::new(&path);
    let mut store = RecordStore::in_memory();
    store.create(session("2024-12-31", "Old"));

    let outcome = ImportLogic::apply(&mut store, path, CsvMapping::Positional, false).expect("import");
    assert_eq!(outcome, ImportOutcome::AlreadyPopulated);
    assert_eq!(store.len(), 1);

    let outcome = ImportLogic::apply(&mut store, path, CsvMapping::Positional, true).expect("replace");
    assert_eq!(outcome, ImportOutcome::Replaced(2));
    assert_eq!(store.len(), 2);
    assert!(store.list().iter().all(|r| r.fields.location != "Old"));
    assert_eq!(store.list()[0].id, RecordId(2));
}

#[test]
fn test_import_logic_missing_file() {
    let mut store = RecordStore::in_memory();
    let err = ImportLogic::apply(
        &mut store,
        Path::new("/nonexistent/evlogbook/import.csv"),
        CsvMapping::Positional,
        false,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("import.csv"));
}

#[test]
fn test_dashboard_summary() {
    let mut store = RecordStore::in_memory();
    store.create(
        session("2025-09-01", "A")
            .with(Field::FullyCharged, "yes")
            .with(Field::ChargingFee, "$10")
            .with(Field::ParkingFee, "5"),
    );
    store.create(
        session("2025-09-10", "B")
            .with(Field::FullyCharged, "Y")
            .with(Field::ChargingFee, "abc")
            .with(Field::ParkingFee, "2.5"),
    );
    store.create(session("2025-09-20", "C").with(Field::FullyCharged, "no"));

    let today = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    let summary = summarize(store.list(), today);

    assert_eq!(summary.total_expenditure, 17.5);
    assert_eq!(summary.last_full_charge, NaiveDate::from_ymd_opt(2025, 9, 10));
    assert_eq!(summary.days_since_full_charge, Some(5));
}

#[test]
fn test_dashboard_without_full_charge() {
    let records = vec![Record::new(RecordId(1), session("2025-09-01", "A"))];
    let summary = summarize(&records, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());

    assert_eq!(summary.total_expenditure, 0.0);
    assert_eq!(summary.last_full_charge, None);
    assert_eq!(summary.days_since_full_charge, None);
}

#[test]
fn test_sort_numeric_with_empty_last() {
    let records = vec![
        Record::new(RecordId(1), ChargeFields::new().with(Field::EnergyAdded, "9")),
        Record::new(RecordId(2), ChargeFields::new()),
        Record::new(RecordId(3), ChargeFields::new().with(Field::EnergyAdded, "10")),
    ];

    let asc: Vec<u64> = sort_records(&records, Field::EnergyAdded, false)
        .iter()
        .map(|r| r.id.value())
        .collect();
    assert_eq!(asc, vec![1, 3, 2]);

    let desc: Vec<u64> = sort_records(&records, Field::EnergyAdded, true)
        .iter()
        .map(|r| r.id.value())
        .collect();
    assert_eq!(desc, vec![3, 1, 2]);

    // the store order itself is untouched
    assert_eq!(records[0].id, RecordId(1));
}

#[test]
fn test_sort_dates_and_text() {
    let records = vec![
        Record::new(RecordId(1), session("2025/09/02", "beta")),
        Record::new(RecordId(2), session("2025-08-30", "Alpha")),
    ];

    let by_date: Vec<u64> = sort_records(&records, Field::Date, false)
        .iter()
        .map(|r| r.id.value())
        .collect();
    assert_eq!(by_date, vec![2, 1]);

    let by_location: Vec<u64> = sort_records(&records, Field::Location, false)
        .iter()
        .map(|r| r.id.value())
        .collect();
    assert_eq!(by_location, vec![2, 1]);
}
