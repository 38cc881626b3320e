// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FactSet, Situation, is_valid_params, validate_fact_set};

fn complete_fact_set() -> FactSet {
    FactSet {
        situation: Some(Situation::Application),
        user_location: String::from("california"),
        company_location: String::from("colorado"),
        office_supervisor_location: String::from("other"),
        employee_in_location: true,
        total_employees: 50,
        role_location: vec![String::from("california"), String::from("colorado")],
    }
}

#[test]
fn test_complete_fact_set_is_valid() {
    assert!(is_valid_params(&complete_fact_set()));
    assert!(validate_fact_set(&complete_fact_set()).is_ok());
}

#[test]
fn test_empty_fact_set_is_invalid() {
    assert!(!is_valid_params(&FactSet::default()));
}

#[test]
fn test_missing_situation_is_invalid() {
    let fact_set: FactSet = FactSet {
        situation: None,
        ..complete_fact_set()
    };
    assert_eq!(
        validate_fact_set(&fact_set),
        Err(DomainError::MissingFact { field: "situation" })
    );
}

#[test]
fn test_each_empty_location_is_invalid() {
    let fact_set: FactSet = FactSet {
        user_location: String::new(),
        ..complete_fact_set()
    };
    assert_eq!(
        validate_fact_set(&fact_set),
        Err(DomainError::MissingFact {
            field: "userLocation"
        })
    );

    let fact_set: FactSet = FactSet {
        company_location: String::new(),
        ..complete_fact_set()
    };
    assert!(!is_valid_params(&fact_set));

    let fact_set: FactSet = FactSet {
        office_supervisor_location: String::new(),
        ..complete_fact_set()
    };
    assert_eq!(
        validate_fact_set(&fact_set),
        Err(DomainError::MissingFact {
            field: "officeSupervisorLocation"
        })
    );
}

#[test]
fn test_zero_total_employees_is_invalid() {
    let fact_set: FactSet = FactSet {
        total_employees: 0,
        ..complete_fact_set()
    };
    assert_eq!(
        validate_fact_set(&fact_set),
        Err(DomainError::MissingFact {
            field: "totalEmployees"
        })
    );
}

#[test]
fn test_requires_at_least_one_role_location() {
    let fact_set: FactSet = FactSet {
        role_location: Vec::new(),
        ..complete_fact_set()
    };
    assert_eq!(
        validate_fact_set(&fact_set),
        Err(DomainError::MissingFact {
            field: "roleLocation"
        })
    );
}

#[test]
fn test_employed_user_needs_no_role_location() {
    let fact_set: FactSet = FactSet {
        situation: Some(Situation::Employed),
        role_location: Vec::new(),
        ..complete_fact_set()
    };
    assert!(is_valid_params(&fact_set));
}

#[test]
fn test_every_non_employed_situation_requires_role_location() {
    for situation in Situation::ALL {
        let fact_set: FactSet = FactSet {
            situation: Some(situation),
            role_location: Vec::new(),
            ..complete_fact_set()
        };
        assert_eq!(
            is_valid_params(&fact_set),
            situation == Situation::Employed,
            "unexpected result for {situation}"
        );
    }
}
