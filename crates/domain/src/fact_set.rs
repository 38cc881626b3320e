// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::situation::Situation;
use serde::{Deserialize, Serialize};

/// A hiring scenario described by the caller.
///
/// Location fields hold a jurisdiction id or a placeholder id. An empty
/// string means the fact was not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSet {
    /// How far the hiring process has progressed.
    pub situation: Option<Situation>,
    /// Where the candidate is.
    pub user_location: String,
    /// Where the company is based.
    pub company_location: String,
    /// Where the supervising office sits.
    pub office_supervisor_location: String,
    /// Whether the company already has staff in the user's location.
    pub employee_in_location: bool,
    /// Company-wide headcount.
    pub total_employees: u32,
    /// Where the role may be performed.
    pub role_location: Vec<String>,
}

impl FactSet {
    /// Returns true if the user already works for the company.
    #[must_use]
    pub fn is_employed(&self) -> bool {
        self.situation == Some(Situation::Employed)
    }

    /// The three single-valued location fields, with their field names.
    #[must_use]
    pub fn anchor_locations(&self) -> [(&'static str, &str); 3] {
        [
            ("userLocation", self.user_location.as_str()),
            ("companyLocation", self.company_location.as_str()),
            (
                "officeSupervisorLocation",
                self.office_supervisor_location.as_str(),
            ),
        ]
    }
}
