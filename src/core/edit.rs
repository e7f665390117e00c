use crate::core::calculator::recompute_derived;
use crate::core::store::{RecordStore, StoreOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{ChargeFields, Field, RecordId};

/// What an edit ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(RecordId),
    Created(RecordId),
}

/// Amend an existing record.
///
/// The stored values are loaded (as the form would be pre-filled), the given
/// assignments are laid over them, derived fields are recomputed and the whole
/// record is written back in one replace.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        store: &mut RecordStore,
        id: RecordId,
        assignments: &[(Field, String)],
        upsert: bool,
    ) -> AppResult<EditOutcome> {
        let base = match store.get(id) {
            Some(record) => record.fields.clone(),
            None if upsert => ChargeFields::default(),
            None => return Err(AppError::RecordNotFound(id.value())),
        };

        let fields = Self::overlay(base, assignments);

        match store.update(id, fields.clone()) {
            StoreOutcome::Applied => Ok(EditOutcome::Updated(id)),
            StoreOutcome::NotFound => Ok(EditOutcome::Created(store.create(fields))),
        }
    }

    fn overlay(mut fields: ChargeFields, assignments: &[(Field, String)]) -> ChargeFields {
        for (field, value) in assignments {
            fields.set(*field, value.clone());
        }
        recompute_derived(&mut fields);
        fields
    }
}
