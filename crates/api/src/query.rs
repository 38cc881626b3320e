// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shareable query-string form of a fact set.
//!
//! Field names are camelCase. `situation` travels as its ordinal, booleans
//! as the literals `true` and `false`, and `roleLocation` as a
//! comma-joined id list. An empty value means the field is unset.

use crate::error::{ApiError, translate_domain_error};
use pay_disclosure::LocationRegistry;
use pay_disclosure_domain::{FactSet, Situation};
use url::form_urlencoded;

pub const SITUATION_PARAM: &str = "situation";
pub const USER_LOCATION_PARAM: &str = "userLocation";
pub const COMPANY_LOCATION_PARAM: &str = "companyLocation";
pub const OFFICE_SUPERVISOR_LOCATION_PARAM: &str = "officeSupervisorLocation";
pub const EMPLOYEE_IN_LOCATION_PARAM: &str = "employeeInLocation";
pub const TOTAL_EMPLOYEES_PARAM: &str = "totalEmployees";
pub const ROLE_LOCATION_PARAM: &str = "roleLocation";

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn parse_situation(value: &str) -> Result<Situation, ApiError> {
    if value.is_empty() {
        return Ok(Situation::default());
    }
    let ordinal: u8 = value.parse().map_err(|_| {
        invalid(
            SITUATION_PARAM,
            format!("'{value}' is not a situation ordinal"),
        )
    })?;
    Situation::from_ordinal(ordinal).map_err(translate_domain_error)
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ApiError> {
    match value {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        _ => Err(invalid(
            field,
            format!("'{value}' must be 'true' or 'false'"),
        )),
    }
}

fn parse_total_employees(value: &str) -> Result<u32, ApiError> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| {
        invalid(
            TOTAL_EMPLOYEES_PARAM,
            format!("'{value}' is not a non-negative whole number"),
        )
    })
}

fn parse_role_locations(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parses a fact set from its query-string form.
///
/// A leading `?` is ignored. Unrecognized parameters are skipped; when a
/// parameter repeats, the last value wins. A missing `situation` means
/// `Interested`.
///
/// # Arguments
///
/// * `query` - The raw query string
/// * `locations` - The registry every named location must be in
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if:
/// - `situation` is not an ordinal in range
/// - A boolean is not `true` or `false`
/// - `totalEmployees` is not a non-negative whole number
/// - A location id is not in the registry
pub fn parse_fact_set_query(
    query: &str,
    locations: &LocationRegistry,
) -> Result<FactSet, ApiError> {
    let mut fact_set: FactSet = FactSet {
        situation: Some(Situation::default()),
        ..FactSet::default()
    };

    let raw: &str = query.strip_prefix('?').unwrap_or(query);
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match &*key {
            SITUATION_PARAM => fact_set.situation = Some(parse_situation(&value)?),
            USER_LOCATION_PARAM => fact_set.user_location = value.into_owned(),
            COMPANY_LOCATION_PARAM => fact_set.company_location = value.into_owned(),
            OFFICE_SUPERVISOR_LOCATION_PARAM => {
                fact_set.office_supervisor_location = value.into_owned();
            }
            EMPLOYEE_IN_LOCATION_PARAM => {
                fact_set.employee_in_location = parse_bool(EMPLOYEE_IN_LOCATION_PARAM, &value)?;
            }
            TOTAL_EMPLOYEES_PARAM => fact_set.total_employees = parse_total_employees(&value)?,
            ROLE_LOCATION_PARAM => fact_set.role_location = parse_role_locations(&value),
            other => tracing::trace!(parameter = %other, "Ignoring unrecognized query parameter"),
        }
    }

    locations
        .check_known_locations(&fact_set)
        .map_err(translate_domain_error)?;

    Ok(fact_set)
}

/// Writes a fact set in its query-string form.
///
/// Every field is written, in a fixed order, so equal fact sets produce
/// equal strings. An unset situation is omitted.
#[must_use]
pub fn fact_set_to_query(fact_set: &FactSet) -> String {
    let mut serializer: form_urlencoded::Serializer<'_, String> =
        form_urlencoded::Serializer::new(String::new());

    if let Some(situation) = fact_set.situation {
        serializer.append_pair(SITUATION_PARAM, &situation.ordinal().to_string());
    }
    serializer
        .append_pair(USER_LOCATION_PARAM, &fact_set.user_location)
        .append_pair(COMPANY_LOCATION_PARAM, &fact_set.company_location)
        .append_pair(
            OFFICE_SUPERVISOR_LOCATION_PARAM,
            &fact_set.office_supervisor_location,
        )
        .append_pair(
            EMPLOYEE_IN_LOCATION_PARAM,
            if fact_set.employee_in_location {
                "true"
            } else {
                "false"
            },
        )
        .append_pair(
            TOTAL_EMPLOYEES_PARAM,
            &fact_set.total_employees.to_string(),
        )
        .append_pair(ROLE_LOCATION_PARAM, &fact_set.role_location.join(","));

    serializer.finish()
}
