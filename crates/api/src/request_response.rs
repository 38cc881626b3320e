// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.

use pay_disclosure_domain::{
    ApplicabilityWindow, ReferenceInfo, Situation, Strength, WhatDisclosure, WhoDisclosure,
};
use serde::Serialize;

/// A matched jurisdiction, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// The jurisdiction id.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The country the jurisdiction is in.
    pub country: String,
    pub strength: Strength,
    /// The earliest point in the hiring process at which disclosure is due.
    pub earliest_disclosure_point: Situation,
    /// Local headcount the employer still needs for the rule to bind.
    pub min_employees_in_locale: u32,
    pub what: WhatDisclosure,
    /// Whether the match is anchored to a supplied location.
    pub is_geo_match: bool,
    /// Situations at which disclosure is only due on request.
    pub request_required_at: Vec<Situation>,
}

/// API response for a match request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesResponse {
    /// Whether the fact set was complete enough to match.
    pub valid: bool,
    /// Why the fact set was not complete, if it was not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The normalized, shareable query string for the fact set.
    pub query: String,
    /// The ranked matches. Empty when `valid` is false.
    pub matches: Vec<MatchInfo>,
}

/// Jurisdiction information for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionSummary {
    pub id: String,
    pub name: String,
    pub country: String,
    pub strength: Strength,
    /// Whether the jurisdiction is a city or county.
    pub is_city: bool,
}

/// API response listing every jurisdiction in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListJurisdictionsResponse {
    pub jurisdictions: Vec<JurisdictionSummary>,
}

/// Full detail of a single jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionInfo {
    pub id: String,
    pub name: String,
    pub country: String,
    pub state: String,
    pub state_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub strength: Strength,
    pub who: WhoDisclosure,
    pub when: Vec<ApplicabilityWindow>,
    pub what: WhatDisclosure,
    /// Citations and enforcement details.
    #[serde(flatten)]
    pub reference: ReferenceInfo,
}

/// A selectable location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOption {
    pub id: String,
    pub name: String,
    /// Whether the location is a placeholder rather than a jurisdiction.
    pub is_placeholder: bool,
}

/// API response listing every selectable location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListLocationsResponse {
    pub locations: Vec<LocationOption>,
}
