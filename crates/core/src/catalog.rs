// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The built-in jurisdiction catalog.
//!
//! The catalog is inert data. It is turned into registries once per
//! process on first use and shared read-only afterwards.

use crate::matching::{Match, find_matching_laws};
use crate::registry::{JurisdictionRegistry, LocationRegistry};
use pay_disclosure_domain::{
    ApplicabilityWindow, DomainError, FactSet, Jurisdiction, ReferenceInfo, Situation, Strength,
    WhatDisclosure, WhoDisclosure,
};
use std::sync::OnceLock;

static DEFAULT_REGISTRY: OnceLock<Result<JurisdictionRegistry, DomainError>> = OnceLock::new();
static DEFAULT_LOCATIONS: OnceLock<Result<LocationRegistry, DomainError>> = OnceLock::new();

/// Returns the process-wide registry built from [`builtin_jurisdictions`].
///
/// # Errors
///
/// Returns the build error if the built-in catalog has colliding ids.
pub fn default_registry() -> Result<&'static JurisdictionRegistry, DomainError> {
    DEFAULT_REGISTRY
        .get_or_init(|| JurisdictionRegistry::build(builtin_jurisdictions()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Returns the process-wide location registry over [`default_registry`].
///
/// # Errors
///
/// Returns the build error of either registry.
pub fn default_locations() -> Result<&'static LocationRegistry, DomainError> {
    DEFAULT_LOCATIONS
        .get_or_init(|| default_registry().and_then(LocationRegistry::with_default_placeholders))
        .as_ref()
        .map_err(Clone::clone)
}

/// Runs [`find_matching_laws`] against the built-in catalog.
///
/// # Errors
///
/// Returns an error only if the built-in catalog fails to build.
pub fn match_default_catalog(fact_set: &FactSet) -> Result<Vec<Match<'static>>, DomainError> {
    Ok(find_matching_laws(
        fact_set,
        default_registry()?,
        default_locations()?,
    ))
}

fn window(situation: Situation) -> ApplicabilityWindow {
    ApplicabilityWindow::at(situation)
}

/// The built-in catalog, in display order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn builtin_jurisdictions() -> Vec<Jurisdiction> {
    vec![
        Jurisdiction::state("Colorado", "CO", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![window(Situation::Interested)])
            .with_what(WhatDisclosure::salary_and_benefits())
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_source("Colorado Department of Labor and Enforcement")
                    .with_reference_url("https://cdle.colorado.gov/equalpaytransparency")
                    .with_report_violation_url("https://cdle.colorado.gov/equalpaytransparency")
                    .with_report_violation_process("by submitting a PDF form via email")
                    .with_penalty("between $500 and $10,000 per violation")
                    .with_legal_url(
                        "https://leg.colorado.gov/sites/default/files/2019a_085_signed.pdf",
                    ),
            ),
        // Disclosure on request does not depend on the 15-employee minimum.
        Jurisdiction::state("California", "CA", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees: Some(15),
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![
                window(Situation::Interested),
                window(Situation::Employed),
            ])
            .with_what(WhatDisclosure::salary())
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_url("https://www.dir.ca.gov/dlse/california_equal_pay_act.htm")
                    .with_reference_source("California Department of Industrial Relations")
                    .with_legal_url(
                        "https://leginfo.legislature.ca.gov/faces/billNavClient.xhtml?bill_id=202120220SB1162",
                    )
                    .with_penalty("between $100 and $10,000 per violation")
                    .with_report_violation_process(
                        "by filing a complaint in writing with the California Labor Commissioner",
                    )
                    .with_report_violation_url(
                        "https://www.dir.ca.gov/dlse/howtofileretaliationcomplaint.htm",
                    ),
            ),
        // Internal transfers and promotions also get the range on request.
        Jurisdiction::state("Washington", "WA", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees: Some(15),
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![window(Situation::Interested)])
            .with_what(WhatDisclosure::salary_and_benefits())
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_url(
                        "https://lni.wa.gov/workers-rights/wages/equal-pay-opportunities-act/#job-postings",
                    )
                    .with_reference_source("Washington Department of Labor & Industries")
                    .with_legal_url("https://app.leg.wa.gov/RCW/default.aspx?cite=49.58.110")
                    .with_report_violation_url(
                        "https://lni.wa.gov/workers-rights/wages/equal-pay-opportunities-act/#job-postings",
                    )
                    .with_report_violation_process(
                        "by filing a complaint online with the Washington Department of Labor & Industries",
                    ),
            ),
        Jurisdiction::state("Connecticut", "CT", Strength::Moderate)
            .with_who(WhoDisclosure {
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![
                window(Situation::Application),
                window(Situation::Hire),
                window(Situation::Offer),
                window(Situation::Employed),
            ])
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url(
                        "https://cga.ct.gov/2021/act/pa/pdf/2021PA-00030-R00HB-06380-PA.pdf",
                    )
                    .with_reference_url("https://portal.ct.gov/dolui/salary-range-disclosure-law-faqs")
                    .with_reference_source("Connecticut Department of Labor")
                    .with_report_violation_process("by filing a complaint with the Labor Commissioner"),
            ),
        Jurisdiction::city("New York", "NY", "New York", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees: Some(4),
                min_employees_in_locale: Some(1),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_source("New York Commission on Human Rights")
                    .with_reference_url("https://www.nyc.gov/site/cchr/media/pay-transparency.page")
                    .with_report_violation_url(
                        "https://www.nyc.gov/site/cchr/about/report-discrimination.page",
                    )
                    .with_penalty(
                        "up to $250,000 if employer does not come into compliance, or for second offenses",
                    ),
            ),
        Jurisdiction::city("New York", "NY", "Albany County", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees: Some(4),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_reference(ReferenceInfo::default().with_legal_url(
                "https://www.albanycounty.com/home/showpublisheddocument/27437/638103243588570000",
            )),
        // Which employers are covered is not spelled out in the statute.
        Jurisdiction::state("Rhode Island", "RI", Strength::Moderate)
            .with_who(WhoDisclosure {
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![
                window(Situation::Application),
                window(Situation::Hire),
                window(Situation::Employed),
            ])
            .with_reference(ReferenceInfo::default().with_legal_url(
                "http://webserver.rilin.state.ri.us/Statutes/TITLE28/28-6/INDEX.htm",
            )),
        // Coverage is not spelled out here either.
        Jurisdiction::state("Nevada", "NV", Strength::Weak)
            .with_who(WhoDisclosure {
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_when(vec![window(Situation::Interview)])
            .with_what(WhatDisclosure::salary())
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url("https://www.leg.state.nv.us/App/NELIS/REL/81st2021/Bill/7896/Text")
                    .with_penalty("up to $5,000 per violation"),
            ),
        Jurisdiction::city("Ohio", "OH", "Cincinnati", Strength::Weak)
            .with_who(WhoDisclosure {
                office_in_locale: Some(true),
                min_employees_in_locale: Some(15),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![ApplicabilityWindow::on_request(Situation::Offer)])
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url(
                        "https://www.cincinnati-oh.gov/cityofcincinnati/equity-in-cincinnati/city-of-cincinnati-s-salary-equity-ordinance/",
                    )
                    .with_penalty("a private cause of action; no enforcement is done by the city"),
            ),
        // Covers "a person engaged in a business, industry, profession,
        // trade, or other enterprise in the State".
        Jurisdiction::state("Maryland", "MD", Strength::Weak)
            .with_who(WhoDisclosure {
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Application)])
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url("https://legiscan.com/MD/bill/HB123/2020")
                    .with_penalty(
                        "a letter compelling compliance (first violation); up to $300 per applicant (second violation); $600 per applicant (further violations)",
                    )
                    .with_report_violation_process(
                        "by submitting a complaint to the Department of Labor",
                    ),
            ),
        // Applies to positions required to be performed in the county.
        Jurisdiction::city("New York", "NY", "Westchester County", Strength::Strong)
            .with_who(WhoDisclosure {
                can_hire_in_locale: Some(true),
                min_employees: Some(4),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_reference(ReferenceInfo::default().with_legal_url(
                "https://westchestercountyny.legistar.com/View.ashx?M=F&ID=10917730&GUID=6BB79D87-02B9-48F0-995D-FA1E9940A0E4",
            )),
        Jurisdiction::city("New York", "NY", "Ithaca", Strength::Strong)
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(4),
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url(
                        "https://www.cityofithaca.org/AgendaCenter/ViewFile/Agenda/_05042022-2491",
                    )
                    .with_reference_source("City of Ithaca")
                    .with_reference_url("https://www.cityofithaca.org/faq.aspx?TID=50"),
            ),
        Jurisdiction::city("New Jersey", "NJ", "Jersey City", Strength::Strong)
            .with_who(WhoDisclosure {
                can_hire_in_locale: Some(true),
                min_employees_in_locale: Some(5),
                ..WhoDisclosure::default()
            })
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_reference(ReferenceInfo::default().with_legal_url(
                "https://cityofjerseycity.civicweb.net/document/68348/",
            )),
        Jurisdiction::city("Ohio", "OH", "Toledo", Strength::Weak)
            .with_what(WhatDisclosure::salary())
            .with_when(vec![ApplicabilityWindow::on_request(Situation::Offer)])
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(15),
                office_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url(
                        "https://codelibrary.amlegal.com/codes/toledo/latest/toledo_oh/0-0-0-159338",
                    )
                    .with_report_violation_process(
                        "a private cause of action; no enforcement is done by the city",
                    ),
            ),
        Jurisdiction::state("New York", "NY", Strength::Strong)
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_who(WhoDisclosure {
                min_employees: Some(4),
                can_hire_in_locale: Some(true),
                office_supervisor_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_source("New York Department of Labor")
                    .with_reference_url("https://dol.ny.gov/pay-transparency")
                    .with_report_violation_url("https://dol.ny.gov/pay-transparency")
                    .with_legal_url("https://www.nysenate.gov/legislation/bills/2023/S1326"),
            ),
        Jurisdiction::state("Hawaii", "HI", Strength::Strong)
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_who(WhoDisclosure {
                min_employees: Some(50),
                ..WhoDisclosure::default()
            })
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_source("Hawaii Civil Rights Commission")
                    .with_reference_url("https://labor.hawaii.gov/hcrc/3767-2/")
                    .with_legal_url(
                        "https://www.capitol.hawaii.gov/session/archives/measure_indiv_Archives.aspx?billtype=SB&billnumber=1057&year=2023",
                    ),
            ),
        Jurisdiction::state("British Columbia", "BC", Strength::Strong)
            .in_country("Canada")
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_who(WhoDisclosure {
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_source("British Columbia Government")
                    .with_reference_url(
                        "https://www2.gov.bc.ca/gov/content/gender-equity/pay-transparency-laws-in-bc",
                    )
                    .with_legal_url(
                        "https://www.bclaws.gov.bc.ca/civix/document/id/complete/statreg/23018",
                    ),
            ),
        Jurisdiction::state("Prince Edward Island", "PE", Strength::Strong)
            .in_country("Canada")
            .with_what(WhatDisclosure::salary())
            .with_when(vec![window(Situation::Interested)])
            .with_who(WhoDisclosure {
                can_hire_in_locale: Some(true),
                ..WhoDisclosure::default()
            })
            .with_reference(
                ReferenceInfo::default()
                    .with_reference_url(
                        "https://www.princeedwardisland.ca/en/information/workforce-advanced-learning-and-population/pay-transparency",
                    )
                    .with_reference_source("Prince Edward Island")
                    .with_legal_url(
                        "https://docs.assembly.pe.ca/download/dms?objectId=2e8abdf3-3f95-463c-b2b0-3ba944edce0d&fileName=bill-119.pdf",
                    ),
            ),
        Jurisdiction::state("Washington, D.C.", "DC", Strength::Strong)
            .with_what(WhatDisclosure::salary_and_benefits())
            .with_when(vec![window(Situation::Interested)])
            .with_who(WhoDisclosure {
                min_employees_in_locale: Some(1),
                ..WhoDisclosure::default()
            })
            .with_reference(
                ReferenceInfo::default()
                    .with_legal_url("https://code.dccouncil.gov/us/dc/council/laws/25-138")
                    .with_report_violation_process(
                        "by emailing the Office of the D.C. Attorney General",
                    )
                    .with_report_violation_url("mailto:workers@dc.gov")
                    .with_penalty("lawsuit by Attorney General with various penalties possible"),
            ),
    ]
}
