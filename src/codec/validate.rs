//! Structural validation of documents arriving from outside the editor.
//!
//! Every check runs and every violation is reported, using stillwater's
//! `Validation` to accumulate failures. Dangling, self-looping and duplicate
//! transitions are valid data and are not reported.

use super::error::ValidationError;
use crate::core::Document;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ValidationError>>;

/// Run all structural checks against `document`.
pub fn validate(document: &Document) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut seen = HashSet::new();

    for (index, node) in document.nodes.iter().enumerate() {
        let id = node.id.as_str();

        checks.push(if id.is_empty() {
            Validation::fail(ValidationError::EmptyNodeId { index })
        } else if !seen.insert(id) {
            Validation::fail(ValidationError::DuplicateNodeId { id: id.to_string() })
        } else {
            Validation::success(())
        });

        checks.push(if node.x.is_finite() && node.y.is_finite() {
            Validation::success(())
        } else {
            Validation::fail(ValidationError::NonFiniteCoordinate { id: id.to_string() })
        });
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate`] as a `Result` listing every violation.
pub fn check(document: &Document) -> Result<(), Vec<ValidationError>> {
    match validate(document) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
