// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_fact_set, create_test_locations, create_test_registry};
use crate::{JurisdictionRegistry, LocationRegistry, validate_for_matching};
use pay_disclosure_domain::{DomainError, FactSet, Situation};

#[test]
fn test_complete_fact_set_is_valid() {
    let registry: JurisdictionRegistry = create_test_registry();
    let locations: LocationRegistry = create_test_locations(&registry);

    assert_eq!(validate_for_matching(&create_test_fact_set(), &locations), Ok(()));
}

#[test]
fn test_missing_fact_is_reported() {
    let registry: JurisdictionRegistry = create_test_registry();
    let locations: LocationRegistry = create_test_locations(&registry);
    let fact_set: FactSet = FactSet {
        total_employees: 0,
        ..create_test_fact_set()
    };

    assert_eq!(
        validate_for_matching(&fact_set, &locations),
        Err(DomainError::MissingFact {
            field: "totalEmployees"
        })
    );
}

#[test]
fn test_unknown_location_reported_before_missing_fact() {
    let registry: JurisdictionRegistry = create_test_registry();
    let locations: LocationRegistry = create_test_locations(&registry);
    let fact_set: FactSet = FactSet {
        situation: None,
        user_location: String::from("atlantis"),
        ..create_test_fact_set()
    };

    assert_eq!(
        validate_for_matching(&fact_set, &locations),
        Err(DomainError::UnknownJurisdiction {
            field: "userLocation",
            id: String::from("atlantis"),
        })
    );
}

#[test]
fn test_employed_without_roles_is_valid() {
    let registry: JurisdictionRegistry = create_test_registry();
    let locations: LocationRegistry = create_test_locations(&registry);
    let fact_set: FactSet = FactSet {
        situation: Some(Situation::Employed),
        role_location: Vec::new(),
        ..create_test_fact_set()
    };

    assert_eq!(validate_for_matching(&fact_set, &locations), Ok(()));
}

#[test]
fn test_default_fact_set_is_invalid() {
    let registry: JurisdictionRegistry = create_test_registry();
    let locations: LocationRegistry = create_test_locations(&registry);

    assert_eq!(
        validate_for_matching(&FactSet::default(), &locations),
        Err(DomainError::MissingFact { field: "situation" })
    );
}
