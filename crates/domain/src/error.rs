// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building or checking domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A situation ordinal or name does not name a hiring stage.
    InvalidSituation(String),
    /// A strength classification is not one of weak, moderate, or strong.
    InvalidStrength(String),
    /// A fact required for matching is missing or empty.
    MissingFact {
        /// The name of the missing fact.
        field: &'static str,
    },
    /// A fact set names a location that is not in the registry.
    UnknownJurisdiction {
        /// The fact-set field carrying the id.
        field: &'static str,
        /// The unknown id.
        id: String,
    },
    /// Two catalog entries normalize to the same id.
    DuplicateJurisdictionId(String),
    /// A catalog entry has no applicability windows and can never match.
    MissingApplicabilityWindows(String),
    /// A catalog could not be read.
    InvalidCatalog {
        /// Description of the failure.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSituation(value) => write!(f, "Invalid situation: {value}"),
            Self::InvalidStrength(value) => write!(f, "Invalid strength: {value}"),
            Self::MissingFact { field } => write!(f, "Missing required fact '{field}'"),
            Self::UnknownJurisdiction { field, id } => {
                write!(f, "Unknown jurisdiction '{id}' in field '{field}'")
            }
            Self::DuplicateJurisdictionId(id) => {
                write!(f, "Jurisdiction id '{id}' is defined more than once")
            }
            Self::MissingApplicabilityWindows(id) => {
                write!(f, "Jurisdiction '{id}' has no applicability windows")
            }
            Self::InvalidCatalog { reason } => write!(f, "Invalid catalog: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
