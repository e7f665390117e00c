use crate::core::store::{RecordStore, StoreOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::RecordId;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &mut RecordStore, id: RecordId) -> AppResult<()> {
        match store.remove(id) {
            StoreOutcome::Applied => Ok(()),
            StoreOutcome::NotFound => Err(AppError::RecordNotFound(id.value())),
        }
    }
}
