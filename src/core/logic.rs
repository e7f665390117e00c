use crate::config::Config;
use crate::core::dashboard;
use crate::core::store::{RecordStore, SeedOutcome};
use crate::db::log::audit;
use crate::db::snapshot::SqliteSnapshotStore;
use crate::errors::AppResult;
use crate::models::dashboard::DashboardSummary;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use std::path::Path;

pub struct Core;

impl Core {
    /// Open the SQLite-backed store described by `cfg`.
    ///
    /// An empty store is seeded once from `cfg.seed_file`; a missing seed
    /// file is normal on first use and stays silent. No seeding happens when
    /// the saved snapshot was unreadable, so it is not overwritten.
    pub fn open_store(cfg: &Config) -> AppResult<RecordStore> {
        let snapshots = SqliteSnapshotStore::open(&cfg.database, &cfg.storage_key)?;

        if !snapshots.exists()? {
            let others = snapshots.other_keys()?;
            if !others.is_empty() {
                warning(format!(
                    "No records saved under '{}', but found snapshot(s) under: {}. \
                     The record layout may have changed; check `storage_key` in the config.",
                    snapshots.key(),
                    others.join(", ")
                ));
            }
        }

        let mut store = RecordStore::open(Box::new(snapshots));

        if let Some(e) = store.load_error() {
            warning(format!(
                "Seed file skipped: the saved snapshot under '{}' is kept untouched until the next change ({e}).",
                cfg.storage_key
            ));
        } else if store.is_empty() {
            let seed = Path::new(&cfg.seed_file);
            if let SeedOutcome::Seeded(n) = store.seed_from_source(seed, cfg.csv_mapping)
                && n > 0
            {
                info(format!("Seeded {n} record(s) from {}", seed.display()));
                audit(
                    &cfg.database,
                    "seed",
                    &seed.to_string_lossy(),
                    &format!("{n} record(s) loaded into an empty logbook"),
                );
            }
        }

        Ok(store)
    }

    pub fn dashboard(store: &RecordStore) -> DashboardSummary {
        dashboard::summarize(store.list(), date::today())
    }
}
