//! Argument guards shared by the aggregates.

use crate::error::{DomainError, DomainResult};

/// Reject an empty string argument.
///
/// Only the zero-length string is rejected; whitespace is accepted as-is.
/// `field` names the argument in the error message.
pub fn non_empty(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::invalid_argument(format!("{field} cannot be empty")));
    }
    Ok(())
}
