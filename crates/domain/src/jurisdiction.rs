// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Concrete jurisdictions and the containment relation between them.
//!
//! A jurisdiction sits at state or city granularity inside a country.
//! Containment is reflexive and only points upward: a state contains the
//! cities in it, a city contains only itself.

use crate::situation::Situation;
use crate::types::{ApplicabilityWindow, ReferenceInfo, Strength, WhatDisclosure, WhoDisclosure};
use serde::{Deserialize, Serialize};

/// The country assumed when a catalog entry does not name one.
///
/// Ids of jurisdictions in this country carry no country prefix.
pub const DEFAULT_COUNTRY: &str = "United States";

fn default_country() -> String {
    String::from(DEFAULT_COUNTRY)
}

/// A state- or city-level jurisdiction with a pay disclosure rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    /// Country name.
    #[serde(default = "default_country")]
    pub country: String,
    /// State, province, or district name.
    pub state: String,
    /// Postal abbreviation of the state.
    pub state_code: String,
    /// City or county name, for sub-state jurisdictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Strength classification.
    pub strength: Strength,
    /// Which employers are bound.
    #[serde(default)]
    pub who: WhoDisclosure,
    /// When disclosure is due.
    #[serde(default)]
    pub when: Vec<ApplicabilityWindow>,
    /// What must be disclosed.
    #[serde(default)]
    pub what: WhatDisclosure,
    /// Citations and enforcement details.
    #[serde(flatten)]
    pub reference: ReferenceInfo,
}

impl Jurisdiction {
    /// Creates a state-level jurisdiction in the default country with no rule attached.
    #[must_use]
    pub fn state(state: &str, state_code: &str, strength: Strength) -> Self {
        Self {
            country: default_country(),
            state: state.to_string(),
            state_code: state_code.to_string(),
            city: None,
            strength,
            who: WhoDisclosure::default(),
            when: Vec::new(),
            what: WhatDisclosure::default(),
            reference: ReferenceInfo::default(),
        }
    }

    /// Creates a city-level jurisdiction in the default country with no rule attached.
    #[must_use]
    pub fn city(state: &str, state_code: &str, city: &str, strength: Strength) -> Self {
        Self {
            city: Some(city.to_string()),
            ..Self::state(state, state_code, strength)
        }
    }

    /// Moves this jurisdiction into another country.
    #[must_use]
    pub fn in_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    #[must_use]
    pub fn with_who(mut self, who: WhoDisclosure) -> Self {
        self.who = who;
        self
    }

    #[must_use]
    pub fn with_when(mut self, when: Vec<ApplicabilityWindow>) -> Self {
        self.when = when;
        self
    }

    #[must_use]
    pub fn with_what(mut self, what: WhatDisclosure) -> Self {
        self.what = what;
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceInfo) -> Self {
        self.reference = reference;
        self
    }

    /// Returns the stable identifier.
    ///
    /// State and city are lowercased and joined with `-`; jurisdictions
    /// outside the default country are prefixed with the lowercased country.
    /// Runs of whitespace become a single `-`.
    #[must_use]
    pub fn id(&self) -> String {
        let state: String = self.state.to_lowercase();
        let city_and_state: String = match &self.city {
            Some(city) => format!("{state}-{}", city.to_lowercase()),
            None => state,
        };

        let raw: String = if self.country == DEFAULT_COUNTRY {
            city_and_state
        } else {
            format!("{}-{city_and_state}", self.country.to_lowercase())
        };

        raw.split_whitespace().collect::<Vec<&str>>().join("-")
    }

    /// Returns the display name: `"<City>, <StateCode>"` or the state name.
    #[must_use]
    pub fn name(&self) -> String {
        match &self.city {
            Some(city) => format!("{city}, {}", self.state_code),
            None => self.state.clone(),
        }
    }

    /// Returns true if this is a city-level jurisdiction.
    #[must_use]
    pub const fn is_city(&self) -> bool {
        self.city.is_some()
    }

    /// Returns true if `other` is this jurisdiction or lies inside it.
    ///
    /// The country and state must match. A state-level jurisdiction contains
    /// every city in it; a city-level jurisdiction contains only itself.
    #[must_use]
    pub fn is_or_contains(&self, other: &Self) -> bool {
        self.country == other.country
            && self.state == other.state
            && (self.city.is_none() || self.city == other.city)
    }

    /// Returns the earliest point at which disclosure is due, if any.
    #[must_use]
    pub fn earliest_disclosure_point(&self) -> Option<Situation> {
        self.when.iter().map(|window| window.situation).min()
    }

    /// Returns true if one of the applicability windows is exactly `situation`.
    #[must_use]
    pub fn discloses_at(&self, situation: Situation) -> bool {
        self.when.iter().any(|window| window.situation == situation)
    }

    /// Returns the configured in-locale headcount threshold, 0 when unset.
    #[must_use]
    pub fn min_employees_in_locale(&self) -> u32 {
        self.who.min_employees_in_locale.unwrap_or(0)
    }
}
