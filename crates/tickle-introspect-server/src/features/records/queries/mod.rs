//! Record queries

pub mod get_by_record_id;

pub use get_by_record_id::{GetRecordError, GetRecordQuery};
