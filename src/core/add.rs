use crate::core::calculator::recompute_derived;
use crate::core::store::RecordStore;
use crate::models::{ChargeFields, RecordId};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Fill in the derived fields and append the record.
    pub fn apply(store: &mut RecordStore, mut fields: ChargeFields) -> RecordId {
        recompute_derived(&mut fields);
        store.create(fields)
    }
}
