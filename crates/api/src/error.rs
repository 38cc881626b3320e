// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use pay_disclosure_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// Problems with caller input become `InvalidInput`; catalog problems are
/// internal, since callers cannot fix them.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidSituation(value) => ApiError::InvalidInput {
            field: String::from("situation"),
            message: format!("'{value}' is not a known situation"),
        },
        DomainError::InvalidStrength(value) => ApiError::InvalidInput {
            field: String::from("strength"),
            message: format!("'{value}' is not a known strength"),
        },
        DomainError::MissingFact { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("A value is required"),
        },
        DomainError::UnknownJurisdiction { field, id } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Unknown jurisdiction '{id}'"),
        },
        err @ (DomainError::DuplicateJurisdictionId(_)
        | DomainError::MissingApplicabilityWindows(_)
        | DomainError::InvalidCatalog { .. }) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
