// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::fact_set::FactSet;

/// Checks that a fact set carries every fact the matcher needs.
///
/// This checks presence only. Whether the named locations exist is a
/// registry question and is checked where the registry is available.
///
/// # Errors
///
/// Returns [`DomainError::MissingFact`] naming the first missing field:
/// - `situation` is unset
/// - any of the three location fields is empty
/// - `totalEmployees` is zero
/// - `roleLocation` is empty and the user is not already employed
pub fn validate_fact_set(fact_set: &FactSet) -> Result<(), DomainError> {
    if fact_set.situation.is_none() {
        return Err(DomainError::MissingFact { field: "situation" });
    }

    for (field, location) in fact_set.anchor_locations() {
        if location.is_empty() {
            return Err(DomainError::MissingFact { field });
        }
    }

    if fact_set.total_employees == 0 {
        return Err(DomainError::MissingFact {
            field: "totalEmployees",
        });
    }

    // An employed user has no prospective role location to give.
    if fact_set.role_location.is_empty() && !fact_set.is_employed() {
        return Err(DomainError::MissingFact {
            field: "roleLocation",
        });
    }

    Ok(())
}

/// Returns true if the fact set is complete enough to run the matcher.
///
/// Pure predicate over [`validate_fact_set`]. Callers decide what to do
/// with a false result; the matcher applies the same gate itself.
#[must_use]
pub fn is_valid_params(fact_set: &FactSet) -> bool {
    validate_fact_set(fact_set).is_ok()
}
