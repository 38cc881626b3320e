// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// A stage of the hiring process.
///
/// Stages are ordered by progression. Every comparison goes through
/// [`Situation::ordinal`], so the order is pinned by the explicit constants
/// below and not by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Situation {
    /// Looking at a posting, before applying.
    #[default]
    Interested,
    /// An application has been submitted.
    Application,
    /// Interviewing.
    Interview,
    /// An offer has been extended.
    Offer,
    /// Hired, not yet working.
    Hire,
    /// Already working for the company.
    Employed,
}

impl Situation {
    /// Ordinal of [`Situation::Interested`].
    pub const INTERESTED: u8 = 0;
    /// Ordinal of [`Situation::Application`].
    pub const APPLICATION: u8 = 1;
    /// Ordinal of [`Situation::Interview`].
    pub const INTERVIEW: u8 = 2;
    /// Ordinal of [`Situation::Offer`].
    pub const OFFER: u8 = 3;
    /// Ordinal of [`Situation::Hire`].
    pub const HIRE: u8 = 4;
    /// Ordinal of [`Situation::Employed`].
    pub const EMPLOYED: u8 = 5;

    /// Every situation, lowest ordinal first.
    pub const ALL: [Self; 6] = [
        Self::Interested,
        Self::Application,
        Self::Interview,
        Self::Offer,
        Self::Hire,
        Self::Employed,
    ];

    /// Returns the ordinal used for comparison and for the query-string form.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Interested => Self::INTERESTED,
            Self::Application => Self::APPLICATION,
            Self::Interview => Self::INTERVIEW,
            Self::Offer => Self::OFFER,
            Self::Hire => Self::HIRE,
            Self::Employed => Self::EMPLOYED,
        }
    }

    /// Looks up a situation by ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSituation`] if the ordinal is out of range.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, DomainError> {
        match ordinal {
            Self::INTERESTED => Ok(Self::Interested),
            Self::APPLICATION => Ok(Self::Application),
            Self::INTERVIEW => Ok(Self::Interview),
            Self::OFFER => Ok(Self::Offer),
            Self::HIRE => Ok(Self::Hire),
            Self::EMPLOYED => Ok(Self::Employed),
            _ => Err(DomainError::InvalidSituation(ordinal.to_string())),
        }
    }

    /// Returns the variant name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interested => "Interested",
            Self::Application => "Application",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hire => "Hire",
            Self::Employed => "Employed",
        }
    }
}

impl PartialOrd for Situation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Situation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl FromStr for Situation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Interested" => Ok(Self::Interested),
            "Application" => Ok(Self::Application),
            "Interview" => Ok(Self::Interview),
            "Offer" => Ok(Self::Offer),
            "Hire" => Ok(Self::Hire),
            "Employed" => Ok(Self::Employed),
            _ => Err(DomainError::InvalidSituation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
