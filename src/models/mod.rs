pub mod dashboard;
pub mod field;
pub mod record;

pub use field::{DERIVED_FIELDS, Field, SCHEMA};
pub use record::{ChargeFields, Record, RecordId};
