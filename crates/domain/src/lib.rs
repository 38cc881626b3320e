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
mod fact_set;
mod jurisdiction;
mod location;
mod situation;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use fact_set::FactSet;
pub use jurisdiction::{DEFAULT_COUNTRY, Jurisdiction};
pub use location::{
    AbstractJurisdiction, CANADA_REMOTE_LOCATION_ID, OTHER_LOCATION_ID, US_REMOTE_LOCATION_ID,
};
pub use situation::Situation;
pub use types::{ApplicabilityWindow, ReferenceInfo, Strength, WhatDisclosure, WhoDisclosure};
pub use validation::{is_valid_params, validate_fact_set};
