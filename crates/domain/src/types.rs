// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::situation::Situation;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How strong a jurisdiction's disclosure law is.
///
/// Informational only; matching never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Disclosure only in narrow cases or on request.
    Weak,
    /// Disclosure at some stages of the process.
    Moderate,
    /// Disclosure in postings or from first contact.
    Strong,
}

impl Strength {
    /// Converts this strength to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl FromStr for Strength {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(Self::Weak),
            "moderate" => Ok(Self::Moderate),
            "strong" => Ok(Self::Strong),
            _ => Err(DomainError::InvalidStrength(s.to_string())),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A point in the hiring process at which disclosure becomes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicabilityWindow {
    /// The stage at which the duty begins.
    pub situation: Situation,
    /// Whether the candidate must ask before the employer has to disclose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_required: Option<bool>,
}

impl ApplicabilityWindow {
    /// A window where disclosure is owed without being asked.
    #[must_use]
    pub const fn at(situation: Situation) -> Self {
        Self {
            situation,
            request_required: None,
        }
    }

    /// A window where disclosure is owed only once the candidate asks.
    #[must_use]
    pub const fn on_request(situation: Situation) -> Self {
        Self {
            situation,
            request_required: Some(true),
        }
    }

    /// Returns true if the candidate has to ask for the disclosure.
    #[must_use]
    pub fn is_request_required(&self) -> bool {
        self.request_required.unwrap_or(false)
    }
}

/// Which employers a jurisdiction's rule binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhoDisclosure {
    /// The employer has an office in the jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_in_locale: Option<bool>,
    /// The employer hires into the jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_hire_in_locale: Option<bool>,
    /// The role must be performed physically in the jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_presence_required: Option<bool>,
    /// The role reports to an office in the jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_supervisor_in_locale: Option<bool>,
    /// Company-wide headcount threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_employees: Option<u32>,
    /// Headcount threshold counted inside the jurisdiction only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_employees_in_locale: Option<u32>,
}

impl WhoDisclosure {
    /// Returns true if the rule binds through a supervising office located here.
    #[must_use]
    pub fn requires_office_supervisor(&self) -> bool {
        self.office_supervisor_in_locale.unwrap_or(false)
    }

    /// Returns true if the company-wide headcount meets the threshold.
    #[must_use]
    pub fn meets_min_employees(&self, total_employees: u32) -> bool {
        self.min_employees
            .is_none_or(|minimum| total_employees >= minimum)
    }
}

/// What a jurisdiction's rule requires to be disclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatDisclosure {
    /// Salary or wage range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<bool>,
    /// Benefits description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<bool>,
}

impl WhatDisclosure {
    /// Salary only.
    #[must_use]
    pub const fn salary() -> Self {
        Self {
            salary: Some(true),
            benefits: None,
        }
    }

    /// Salary and benefits.
    #[must_use]
    pub const fn salary_and_benefits() -> Self {
        Self {
            salary: Some(true),
            benefits: Some(true),
        }
    }

    #[must_use]
    pub fn includes_salary(&self) -> bool {
        self.salary.unwrap_or(false)
    }

    #[must_use]
    pub fn includes_benefits(&self) -> bool {
        self.benefits.unwrap_or(false)
    }
}

/// Citations and enforcement details. Carried for display, never matched on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_violation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_violation_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<String>,
}

impl ReferenceInfo {
    #[must_use]
    pub fn with_reference_source(mut self, source: &str) -> Self {
        self.reference_source = Some(source.to_string());
        self
    }

    #[must_use]
    pub fn with_reference_url(mut self, url: &str) -> Self {
        self.reference_url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn with_legal_url(mut self, url: &str) -> Self {
        self.legal_url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn with_report_violation_url(mut self, url: &str) -> Self {
        self.report_violation_url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn with_report_violation_process(mut self, process: &str) -> Self {
        self.report_violation_process = Some(process.to_string());
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, penalty: &str) -> Self {
        self.penalty = Some(penalty.to_string());
        self
    }
}
