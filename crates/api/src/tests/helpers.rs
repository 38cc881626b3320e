// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use pay_disclosure::{JurisdictionRegistry, LocationRegistry, default_locations, default_registry};
use pay_disclosure_domain::{FactSet, Situation};

pub fn registry() -> &'static JurisdictionRegistry {
    default_registry().unwrap()
}

pub fn locations() -> &'static LocationRegistry {
    default_locations().unwrap()
}

/// California candidate, Colorado company with staff in California.
pub fn create_test_fact_set() -> FactSet {
    FactSet {
        situation: Some(Situation::Interested),
        user_location: String::from("california"),
        company_location: String::from("colorado"),
        office_supervisor_location: String::from("other"),
        employee_in_location: true,
        total_employees: 50,
        role_location: vec![String::from("california"), String::from("colorado")],
    }
}
