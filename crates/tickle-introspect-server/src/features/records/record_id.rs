//! Composite record identifiers: `<dataset name>:<local id>`
//!
//! Examples: `125320-m21:00003196`, `150024-bibvagt:002da116-5827-a6e4-fd70-d85bbb97c099`.

/// A composite record identifier split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId<'a> {
    pub dataset_name: &'a str,
    pub local_id: &'a str,
}

impl<'a> RecordId<'a> {
    /// Split on the first `:`; anything after it, colons included, is the local id.
    ///
    /// Input without a `:` has no record id and yields `None`.
    pub fn parse(record_id: &'a str) -> Option<Self> {
        let (dataset_name, local_id) = record_id.split_once(':')?;
        Some(Self {
            dataset_name,
            local_id,
        })
    }
}
