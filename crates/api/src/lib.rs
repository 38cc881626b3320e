// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod query;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{check_matches, get_jurisdiction, list_jurisdictions, list_locations};
pub use query::{
    COMPANY_LOCATION_PARAM, EMPLOYEE_IN_LOCATION_PARAM, OFFICE_SUPERVISOR_LOCATION_PARAM,
    ROLE_LOCATION_PARAM, SITUATION_PARAM, TOTAL_EMPLOYEES_PARAM, USER_LOCATION_PARAM,
    fact_set_to_query, parse_fact_set_query,
};
pub use request_response::{
    JurisdictionInfo, JurisdictionSummary, ListJurisdictionsResponse, ListLocationsResponse,
    LocationOption, MatchInfo, MatchesResponse,
};
