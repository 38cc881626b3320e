// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_domain_error};
use pay_disclosure_domain::DomainError;

#[test]
fn test_unknown_jurisdiction_is_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::UnknownJurisdiction {
        field: "roleLocation",
        id: String::from("atlantis"),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("roleLocation"),
            message: String::from("Unknown jurisdiction 'atlantis'"),
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'roleLocation': Unknown jurisdiction 'atlantis'"
    );
}

#[test]
fn test_missing_fact_is_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::MissingFact {
        field: "totalEmployees",
    });

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "totalEmployees"
    ));
}

#[test]
fn test_invalid_situation_names_the_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidSituation(String::from("9")));

    assert_eq!(
        err.to_string(),
        "Invalid input for field 'situation': '9' is not a known situation"
    );
}

#[test]
fn test_catalog_errors_are_internal() {
    let err: ApiError =
        translate_domain_error(DomainError::DuplicateJurisdictionId(String::from("colorado")));

    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("Jurisdiction id 'colorado' is defined more than once"),
        }
    );
    assert!(matches!(
        translate_domain_error(DomainError::InvalidCatalog {
            reason: String::from("expected a list"),
        }),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_not_found_display() {
    let err: ApiError = ApiError::ResourceNotFound {
        resource_type: String::from("Jurisdiction"),
        message: String::from("No jurisdiction with id 'atlantis'"),
    };

    assert_eq!(
        err.to_string(),
        "Jurisdiction not found: No jurisdiction with id 'atlantis'"
    );
}
