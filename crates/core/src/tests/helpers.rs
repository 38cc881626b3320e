// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test catalog. Draws on, but deliberately differs from, the built-in one.

use crate::{JurisdictionRegistry, LocationRegistry, Match};
use pay_disclosure_domain::{
    ApplicabilityWindow, FactSet, Jurisdiction, Situation, Strength, WhatDisclosure,
    WhoDisclosure,
};

pub fn create_test_jurisdictions() -> Vec<Jurisdiction> {
    vec![
        Jurisdiction::state("Colorado", "CO", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![ApplicabilityWindow::at(Situation::Interested)])
            .with_what(WhatDisclosure::salary_and_benefits()),
        Jurisdiction::state("California", "CA", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees: Some(15),
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![
                ApplicabilityWindow::at(Situation::Interested),
                ApplicabilityWindow::at(Situation::Employed),
            ])
            .with_what(WhatDisclosure::salary()),
        Jurisdiction::state("Washington", "WA", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees: Some(15),
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![ApplicabilityWindow::at(Situation::Interested)])
            .with_what(WhatDisclosure::salary_and_benefits()),
        Jurisdiction::state("Nevada", "NV", Strength::Weak)
            .with_who(WhoDisclosure {
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![ApplicabilityWindow::at(Situation::Interview)])
            .with_what(WhatDisclosure::salary()),
        Jurisdiction::city("Nevada", "NV", "Goodsprings", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(5),
                ..WhoDisclosure::default()
            })
            .with_when(vec![ApplicabilityWindow::at(Situation::Interview)])
            .with_what(WhatDisclosure::salary_and_benefits()),
        Jurisdiction::city("Ohio", "OH", "Toledo", Strength::Weak)
            .with_what(WhatDisclosure::salary())
            .with_when(vec![ApplicabilityWindow::on_request(Situation::Offer)])
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(15),
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            }),
        Jurisdiction::state("New York", "NY", Strength::Strong)
            .with_what(WhatDisclosure::salary())
            .with_when(vec![ApplicabilityWindow::at(Situation::Interested)])
            .with_who(WhoDisclosure {
                office_supervisor_in_locale: Some(true),
                ..WhoDisclosure::default()
            }),
    ]
}

pub fn create_test_registry() -> JurisdictionRegistry {
    JurisdictionRegistry::build(create_test_jurisdictions()).unwrap()
}

pub fn create_test_locations(registry: &JurisdictionRegistry) -> LocationRegistry {
    LocationRegistry::with_default_placeholders(registry).unwrap()
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
        role_location: vec![
            String::from("california"),
            String::from("colorado"),
            String::from("washington"),
            String::from("nevada"),
        ],
    }
}

pub fn role_locations(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

pub fn match_ids(matches: &[Match<'_>]) -> Vec<String> {
    matches.iter().map(|m| m.jurisdiction.id()).collect()
}

pub fn find_by_id<'m, 'a>(matches: &'m [Match<'a>], id: &str) -> Option<&'m Match<'a>> {
    matches.iter().find(|m| m.jurisdiction.id() == id)
}
