//! Shared helpers for features

#[cfg(test)]
pub mod test_helpers;
