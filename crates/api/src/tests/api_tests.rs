// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{locations, registry};
use crate::{
    ApiError, JurisdictionInfo, ListJurisdictionsResponse, ListLocationsResponse, MatchInfo,
    MatchesResponse, check_matches, get_jurisdiction, list_jurisdictions, list_locations,
};
use pay_disclosure_domain::Situation;

fn match_ids(response: &MatchesResponse) -> Vec<&str> {
    response
        .matches
        .iter()
        .map(|info| info.id.as_str())
        .collect()
}

#[test]
fn test_check_matches_city() {
    let response: MatchesResponse = check_matches(
        "situation=0&userLocation=new-york-new-york&companyLocation=new-york-new-york\
         &officeSupervisorLocation=other&employeeInLocation=true&totalEmployees=100\
         &roleLocation=new-york-new-york",
        registry(),
        locations(),
    )
    .unwrap();

    assert!(response.valid);
    assert_eq!(response.reason, None);
    assert_eq!(match_ids(&response), vec!["new-york-new-york", "new-york"]);

    let city: &MatchInfo = &response.matches[0];
    assert_eq!(city.name, "New York, NY");
    assert_eq!(city.country, "United States");
    assert_eq!(city.earliest_disclosure_point, Situation::Interested);
    assert_eq!(city.min_employees_in_locale, 0);
    assert!(city.is_geo_match);
    assert!(city.request_required_at.is_empty());
}

#[test]
fn test_check_matches_reports_on_request_windows() {
    let response: MatchesResponse = check_matches(
        "situation=3&userLocation=other&companyLocation=ohio-toledo\
         &officeSupervisorLocation=other&employeeInLocation=false&totalEmployees=50\
         &roleLocation=ohio-toledo",
        registry(),
        locations(),
    )
    .unwrap();

    let toledo: &MatchInfo = response
        .matches
        .iter()
        .find(|info| info.id == "ohio-toledo")
        .unwrap();
    assert_eq!(toledo.request_required_at, vec![Situation::Offer]);
    assert_eq!(toledo.min_employees_in_locale, 15);
}

#[test]
fn test_check_matches_incomplete_fact_set() {
    let response: MatchesResponse = check_matches(
        "userLocation=california&companyLocation=colorado&officeSupervisorLocation=other\
         &roleLocation=us",
        registry(),
        locations(),
    )
    .unwrap();

    assert!(!response.valid);
    assert_eq!(
        response.reason.as_deref(),
        Some("Missing required fact 'totalEmployees'")
    );
    assert!(response.matches.is_empty());
}

#[test]
fn test_check_matches_returns_normalized_query() {
    let response: MatchesResponse = check_matches(
        "roleLocation=us,,&totalEmployees=10&companyLocation=colorado",
        registry(),
        locations(),
    )
    .unwrap();

    assert_eq!(
        response.query,
        "situation=0&userLocation=&companyLocation=colorado&officeSupervisorLocation=\
         &employeeInLocation=false&totalEmployees=10&roleLocation=us"
    );
}

#[test]
fn test_check_matches_rejects_malformed_query() {
    let result: Result<MatchesResponse, ApiError> =
        check_matches("totalEmployees=many", registry(), locations());

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_matches_response_json_shape() {
    let response: MatchesResponse = check_matches(
        "situation=0&userLocation=colorado&companyLocation=colorado\
         &officeSupervisorLocation=other&employeeInLocation=true&totalEmployees=100\
         &roleLocation=colorado",
        registry(),
        locations(),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["valid"], true);
    assert!(json.get("reason").is_none());
    assert_eq!(json["matches"][0]["id"], "colorado");
    assert_eq!(json["matches"][0]["isGeoMatch"], true);
    assert_eq!(json["matches"][0]["earliestDisclosurePoint"], "Interested");
    assert_eq!(json["matches"][0]["strength"], "strong");
    assert_eq!(json["matches"][0]["what"]["benefits"], true);
}

#[test]
fn test_list_jurisdictions_in_catalog_order() {
    let response: ListJurisdictionsResponse = list_jurisdictions(registry());

    assert_eq!(response.jurisdictions.len(), 19);
    assert_eq!(response.jurisdictions[0].id, "colorado");
    assert!(!response.jurisdictions[0].is_city);
    assert!(
        response
            .jurisdictions
            .iter()
            .any(|summary| summary.id == "canada-british-columbia" && summary.country == "Canada")
    );
}

#[test]
fn test_get_jurisdiction() {
    let info: JurisdictionInfo = get_jurisdiction(registry(), "ohio-toledo").unwrap();

    assert_eq!(info.name, "Toledo, OH");
    assert_eq!(info.city.as_deref(), Some("Toledo"));
    assert_eq!(info.who.min_employees_in_locale, Some(15));
    assert!(info.reference.legal_url.is_some());
}

#[test]
fn test_get_jurisdiction_with_punctuated_id() {
    let info: JurisdictionInfo = get_jurisdiction(registry(), "washington,-d.c.").unwrap();

    assert_eq!(info.state_code, "DC");
    assert_eq!(info.name, "Washington, D.C.");
}

#[test]
fn test_get_jurisdiction_rejects_malformed_slug() {
    for slug in ["", "Colorado", "-colorado", "1colorado"] {
        let err: ApiError = get_jurisdiction(registry(), slug).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput { .. }), "{slug}");
    }
}

#[test]
fn test_get_jurisdiction_not_found() {
    let err: ApiError = get_jurisdiction(registry(), "atlantis").unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_get_jurisdiction_placeholder_not_found() {
    let err: ApiError = get_jurisdiction(registry(), "us").unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_list_locations_placeholders_first() {
    let response: ListLocationsResponse = list_locations(locations());

    assert_eq!(response.locations.len(), 22);
    let placeholders: Vec<(&str, &str)> = response.locations[..3]
        .iter()
        .map(|option| (option.id.as_str(), option.name.as_str()))
        .collect();
    assert_eq!(
        placeholders,
        vec![
            ("other", "Somewhere else"),
            ("us", "All US (Remote)"),
            ("canada", "All Canada (Remote)"),
        ]
    );
    assert!(response.locations[..3].iter().all(|option| option.is_placeholder));
    assert!(response.locations[3..].iter().all(|option| !option.is_placeholder));
}
