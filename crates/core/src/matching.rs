// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Matching a fact set against the jurisdiction registry.
//!
//! ## Heuristic
//!
//! Facts a user can reliably supply (their own location, the company's
//! declared location, the supervising office, total headcount) are trusted
//! more than facts about how the company's staff is spread across every
//! place a role might touch. A match anchored to one of the supplied
//! locations is a *geo-match* and ranks ahead of matches inferred from the
//! role location or headcount alone.
//!
//! ## Gates
//!
//! A jurisdiction is emitted when all of these hold:
//! 1. Eligibility: a role location is or contains it, the user is already
//!    employed, or it is a geo-match
//! 2. Timing: the process has reached its earliest applicability window
//!    (an employed user needs an explicit `Employed` window)
//! 3. Headcount: the company-wide minimum, if any, is met
//!
//! ## Ranking
//!
//! Geo-matches first, then rules that cover benefits, then rules that
//! need no local headcount. Remaining ties keep registry order.

use crate::ranking::{Criterion, sort_by_boolean, sort_by_criteria};
use crate::registry::{JurisdictionRegistry, LocationRegistry};
use pay_disclosure_domain::{
    AbstractJurisdiction, FactSet, Jurisdiction, Situation, WhatDisclosure, is_valid_params,
};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// A jurisdiction whose rule plausibly applies to a fact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match<'a> {
    /// The matched jurisdiction.
    pub jurisdiction: &'a Jurisdiction,
    /// The lowest-ordinal applicability window.
    pub earliest_disclosure_point: Situation,
    /// Local headcount still required, after relaxation for geo-matches.
    pub min_employees_in_locale: u32,
    /// What must be disclosed.
    pub what: WhatDisclosure,
    /// Whether the match is anchored to a supplied location.
    pub is_geo_match: bool,
}

/// Locations named by a fact set, resolved against the registries.
struct ResolvedLocations<'r> {
    company: Vec<&'r Jurisdiction>,
    user: Vec<&'r Jurisdiction>,
    office_supervisor: Vec<&'r Jurisdiction>,
    roles: Vec<&'r AbstractJurisdiction>,
}

impl<'r> ResolvedLocations<'r> {
    fn resolve(
        fact_set: &FactSet,
        registry: &'r JurisdictionRegistry,
        locations: &'r LocationRegistry,
    ) -> Self {
        let roles: Vec<&AbstractJurisdiction> = fact_set
            .role_location
            .iter()
            .filter_map(|id| {
                let location: Option<&AbstractJurisdiction> = locations.get(id);
                if location.is_none() {
                    trace!(id = %id, "Ignoring unknown role location");
                }
                location
            })
            .collect();

        Self {
            company: registry.containing(&fact_set.company_location),
            user: registry.containing(&fact_set.user_location),
            office_supervisor: registry.containing(&fact_set.office_supervisor_location),
            roles,
        }
    }
}

fn contains_any(jurisdiction: &Jurisdiction, candidates: &[&Jurisdiction]) -> bool {
    candidates
        .iter()
        .any(|candidate| jurisdiction.is_or_contains(candidate))
}

fn is_geo_match(
    jurisdiction: &Jurisdiction,
    fact_set: &FactSet,
    resolved: &ResolvedLocations<'_>,
) -> bool {
    if contains_any(jurisdiction, &resolved.company) {
        return true;
    }

    if jurisdiction.who.requires_office_supervisor()
        && contains_any(jurisdiction, &resolved.office_supervisor)
    {
        return true;
    }

    // Hiring the user puts at least one employee in their location, which
    // satisfies a local threshold of one.
    contains_any(jurisdiction, &resolved.user)
        && (fact_set.employee_in_location
            || fact_set.is_employed()
            || jurisdiction.min_employees_in_locale() <= 1)
}

/// Returns the earliest disclosure point if the process has reached it.
fn timing_gate(jurisdiction: &Jurisdiction, situation: Situation) -> Option<Situation> {
    let earliest: Situation = jurisdiction.earliest_disclosure_point()?;

    let reached: bool = if situation == Situation::Employed {
        jurisdiction.discloses_at(Situation::Employed)
    } else {
        situation >= earliest
    };

    reached.then_some(earliest)
}

fn by_geo_match(a: &Match<'_>, b: &Match<'_>) -> Ordering {
    sort_by_boolean(a.is_geo_match, b.is_geo_match)
}

fn by_benefits(a: &Match<'_>, b: &Match<'_>) -> Ordering {
    sort_by_boolean(a.what.includes_benefits(), b.what.includes_benefits())
}

fn by_no_local_minimum(a: &Match<'_>, b: &Match<'_>) -> Ordering {
    sort_by_boolean(
        a.min_employees_in_locale == 0,
        b.min_employees_in_locale == 0,
    )
}

/// The ranking criteria applied to match output, best first.
#[must_use]
pub fn match_criteria<'a>() -> [Criterion<Match<'a>>; 3] {
    [
        by_geo_match as Criterion<Match<'a>>,
        by_benefits as Criterion<Match<'a>>,
        by_no_local_minimum as Criterion<Match<'a>>,
    ]
}

/// Finds the jurisdictions whose disclosure rules plausibly apply.
///
/// Returns an empty list if the fact set is not complete enough to match
/// (see [`is_valid_params`]). Ids missing from the registries contribute
/// nothing instead of failing.
#[must_use]
pub fn find_matching_laws<'a>(
    fact_set: &FactSet,
    registry: &'a JurisdictionRegistry,
    locations: &LocationRegistry,
) -> Vec<Match<'a>> {
    if !is_valid_params(fact_set) {
        debug!("Fact set is incomplete; skipping matching");
        return Vec::new();
    }
    let Some(situation) = fact_set.situation else {
        return Vec::new();
    };

    let resolved: ResolvedLocations<'_> = ResolvedLocations::resolve(fact_set, registry, locations);
    let mut matches: Vec<Match<'a>> = Vec::new();

    for (id, jurisdiction) in registry.iter() {
        let geo_match: bool = is_geo_match(jurisdiction, fact_set, &resolved);
        let eligible: bool = geo_match
            || fact_set.is_employed()
            || resolved
                .roles
                .iter()
                .any(|role| role.is_or_contains(jurisdiction));
        if !eligible {
            continue;
        }

        let Some(earliest_disclosure_point) = timing_gate(jurisdiction, situation) else {
            trace!(id = %id, %situation, "Disclosure point not reached");
            continue;
        };

        if !jurisdiction.who.meets_min_employees(fact_set.total_employees) {
            trace!(id = %id, "Company-wide headcount threshold not met");
            continue;
        }

        let mut min_employees_in_locale: u32 = jurisdiction.min_employees_in_locale();
        if min_employees_in_locale == 1 && geo_match {
            min_employees_in_locale = 0;
        }

        matches.push(Match {
            jurisdiction,
            earliest_disclosure_point,
            min_employees_in_locale,
            what: jurisdiction.what,
            is_geo_match: geo_match,
        });
    }

    sort_by_criteria(&mut matches, &match_criteria());

    debug!(
        %situation,
        matched = matches.len(),
        geo_matched = matches.iter().filter(|m| m.is_geo_match).count(),
        "Matched fact set against registry"
    );

    matches
}
