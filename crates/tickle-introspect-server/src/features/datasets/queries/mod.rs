//! Dataset queries

pub mod by_local_id;
pub mod list_summaries;

pub use by_local_id::{DataSetsByLocalIdQuery, DataSetsByLocalIdError};
pub use list_summaries::{ListDataSetSummariesError, ListDataSetSummariesQuery};
