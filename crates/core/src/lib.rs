// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod matching;
mod ranking;
mod registry;

#[cfg(test)]
mod tests;

use pay_disclosure_domain::{DomainError, FactSet, validate_fact_set};

// Re-export public types and functions
pub use catalog::{builtin_jurisdictions, default_locations, default_registry, match_default_catalog};
pub use matching::{Match, find_matching_laws, match_criteria};
pub use ranking::{Criterion, compare_by_criteria, sort_by_boolean, sort_by_criteria};
pub use registry::{JurisdictionRegistry, LocationRegistry};

/// Validates a fact set before matching.
///
/// This is a read-only check combining the presence rules with the
/// registry lookup of every named location.
///
/// # Arguments
///
/// * `fact_set` - The fact set to check
/// * `locations` - The registry of selectable locations
///
/// # Errors
///
/// Returns an error if:
/// - A required fact is missing
/// - A location id is not in the registry
pub fn validate_for_matching(
    fact_set: &FactSet,
    locations: &LocationRegistry,
) -> Result<(), DomainError> {
    // Unknown ids are reported first; they explain an empty result better
    // than a missing field further down.
    locations.check_known_locations(fact_set)?;
    validate_fact_set(fact_set)
}
