// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only API operations.
//!
//! Every operation works on registries built once at startup and never
//! mutated, so handlers need no synchronization.

use pay_disclosure::{
    JurisdictionRegistry, LocationRegistry, Match, find_matching_laws, validate_for_matching,
};
use pay_disclosure_domain::{FactSet, Jurisdiction};

use crate::error::ApiError;
use crate::query::{fact_set_to_query, parse_fact_set_query};
use crate::request_response::{
    JurisdictionInfo, JurisdictionSummary, ListJurisdictionsResponse, ListLocationsResponse,
    LocationOption, MatchInfo, MatchesResponse,
};

fn to_match_info(found: &Match<'_>) -> MatchInfo {
    let jurisdiction: &Jurisdiction = found.jurisdiction;
    MatchInfo {
        id: jurisdiction.id(),
        name: jurisdiction.name(),
        country: jurisdiction.country.clone(),
        strength: jurisdiction.strength,
        earliest_disclosure_point: found.earliest_disclosure_point,
        min_employees_in_locale: found.min_employees_in_locale,
        what: found.what,
        is_geo_match: found.is_geo_match,
        request_required_at: jurisdiction
            .when
            .iter()
            .filter(|window| window.is_request_required())
            .map(|window| window.situation)
            .collect(),
    }
}

fn to_jurisdiction_info(id: &str, jurisdiction: &Jurisdiction) -> JurisdictionInfo {
    JurisdictionInfo {
        id: id.to_string(),
        name: jurisdiction.name(),
        country: jurisdiction.country.clone(),
        state: jurisdiction.state.clone(),
        state_code: jurisdiction.state_code.clone(),
        city: jurisdiction.city.clone(),
        strength: jurisdiction.strength,
        who: jurisdiction.who,
        when: jurisdiction.when.clone(),
        what: jurisdiction.what,
        reference: jurisdiction.reference.clone(),
    }
}

/// Matches a fact set, given in its query-string form, against the registry.
///
/// A fact set that parses but is missing required facts is not an error:
/// the response is marked invalid and carries no matches.
///
/// # Arguments
///
/// * `query` - The raw query string
/// * `registry` - The jurisdiction registry
/// * `locations` - The location registry
///
/// # Errors
///
/// Returns an error if the query string holds a malformed value or an
/// unknown location id.
pub fn check_matches(
    query: &str,
    registry: &JurisdictionRegistry,
    locations: &LocationRegistry,
) -> Result<MatchesResponse, ApiError> {
    let fact_set: FactSet = parse_fact_set_query(query, locations).inspect_err(|err| {
        tracing::warn!(error = %err, "Rejected fact set query");
    })?;
    let normalized: String = fact_set_to_query(&fact_set);

    if let Err(err) = validate_for_matching(&fact_set, locations) {
        tracing::info!(reason = %err, "Fact set incomplete; no matches computed");
        return Ok(MatchesResponse {
            valid: false,
            reason: Some(err.to_string()),
            query: normalized,
            matches: Vec::new(),
        });
    }

    let matches: Vec<MatchInfo> = find_matching_laws(&fact_set, registry, locations)
        .iter()
        .map(to_match_info)
        .collect();

    tracing::info!(matched = matches.len(), "Matched fact set");

    Ok(MatchesResponse {
        valid: true,
        reason: None,
        query: normalized,
        matches,
    })
}

/// Lists every jurisdiction in catalog order.
///
/// This operation never fails.
#[must_use]
pub fn list_jurisdictions(registry: &JurisdictionRegistry) -> ListJurisdictionsResponse {
    let jurisdictions: Vec<JurisdictionSummary> = registry
        .iter()
        .map(|(id, jurisdiction)| JurisdictionSummary {
            id: id.to_string(),
            name: jurisdiction.name(),
            country: jurisdiction.country.clone(),
            strength: jurisdiction.strength,
            is_city: jurisdiction.is_city(),
        })
        .collect();

    ListJurisdictionsResponse { jurisdictions }
}

/// Returns the full detail of one jurisdiction.
///
/// # Arguments
///
/// * `registry` - The jurisdiction registry
/// * `slug` - The jurisdiction id
///
/// # Errors
///
/// Returns an error if:
/// - The slug does not start with a lowercase ASCII letter
/// - No jurisdiction has that id
pub fn get_jurisdiction(
    registry: &JurisdictionRegistry,
    slug: &str,
) -> Result<JurisdictionInfo, ApiError> {
    if !slug.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(ApiError::InvalidInput {
            field: String::from("id"),
            message: format!("'{slug}' is not a jurisdiction id"),
        });
    }

    registry
        .get(slug)
        .map(|jurisdiction| to_jurisdiction_info(slug, jurisdiction))
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Jurisdiction"),
            message: format!("No jurisdiction with id '{slug}'"),
        })
}

/// Lists every selectable location, placeholders first.
///
/// This operation never fails.
#[must_use]
pub fn list_locations(locations: &LocationRegistry) -> ListLocationsResponse {
    let locations: Vec<LocationOption> = locations
        .iter()
        .map(|location| LocationOption {
            id: location.id(),
            name: location.name(),
            is_placeholder: location.is_placeholder(),
        })
        .collect();

    ListLocationsResponse { locations }
}
