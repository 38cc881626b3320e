// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::jurisdiction::{DEFAULT_COUNTRY, Jurisdiction};

/// Id of the "somewhere else" placeholder.
pub const OTHER_LOCATION_ID: &str = "other";
/// Id of the "anywhere in the US, remote" placeholder.
pub const US_REMOTE_LOCATION_ID: &str = "us";
/// Id of the "anywhere in Canada, remote" placeholder.
pub const CANADA_REMOTE_LOCATION_ID: &str = "canada";

/// Anything a user can pick as a location.
///
/// Only [`AbstractJurisdiction::Concrete`] entries can show up in match
/// output. The other two variants let a user answer "I don't know" or
/// "anywhere in this country".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbstractJurisdiction {
    /// A real jurisdiction from the catalog.
    Concrete(Jurisdiction),
    /// Remote work anywhere in a country.
    AllCountryRemote {
        /// Location id.
        id: String,
        /// Display name.
        name: String,
        /// The country covered. `None` covers every concrete jurisdiction.
        country: Option<String>,
    },
    /// An unresolved location. Never contains anything.
    Unknown,
}

impl AbstractJurisdiction {
    /// The "All US (Remote)" placeholder.
    #[must_use]
    pub fn all_us() -> Self {
        Self::AllCountryRemote {
            id: String::from(US_REMOTE_LOCATION_ID),
            name: String::from("All US (Remote)"),
            country: Some(String::from(DEFAULT_COUNTRY)),
        }
    }

    /// The "All Canada (Remote)" placeholder.
    #[must_use]
    pub fn all_canada() -> Self {
        Self::AllCountryRemote {
            id: String::from(CANADA_REMOTE_LOCATION_ID),
            name: String::from("All Canada (Remote)"),
            country: Some(String::from("Canada")),
        }
    }

    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Concrete(jurisdiction) => jurisdiction.id(),
            Self::AllCountryRemote { id, .. } => id.clone(),
            Self::Unknown => String::from(OTHER_LOCATION_ID),
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Concrete(jurisdiction) => jurisdiction.name(),
            Self::AllCountryRemote { name, .. } => name.clone(),
            Self::Unknown => String::from("Somewhere else"),
        }
    }

    /// Returns true if `other` is, or lies inside, this location.
    #[must_use]
    pub fn is_or_contains(&self, other: &Jurisdiction) -> bool {
        match self {
            Self::Concrete(jurisdiction) => jurisdiction.is_or_contains(other),
            Self::AllCountryRemote { country, .. } => country
                .as_deref()
                .is_none_or(|country| country == other.country),
            Self::Unknown => false,
        }
    }

    /// Returns the concrete jurisdiction, if this is one.
    #[must_use]
    pub const fn as_concrete(&self) -> Option<&Jurisdiction> {
        match self {
            Self::Concrete(jurisdiction) => Some(jurisdiction),
            Self::AllCountryRemote { .. } | Self::Unknown => None,
        }
    }

    /// Returns true for the two placeholder variants.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        !matches!(self, Self::Concrete(_))
    }
}
