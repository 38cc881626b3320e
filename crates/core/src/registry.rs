// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only registries of jurisdictions and selectable locations.
//!
//! Both registries are built once and never mutated afterwards, so they
//! can be shared between concurrent queries without locking. Iteration
//! follows insertion order; the ranking step relies on that order to break
//! full ties.

use pay_disclosure_domain::{
    AbstractJurisdiction, DomainError, FactSet, Jurisdiction, OTHER_LOCATION_ID,
};
use std::collections::HashMap;
use tracing::{info, warn};

/// Concrete jurisdictions keyed by their derived id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JurisdictionRegistry {
    entries: Vec<(String, Jurisdiction)>,
    index: HashMap<String, usize>,
}

impl JurisdictionRegistry {
    /// Builds a registry from a list of jurisdictions, keeping their order.
    ///
    /// Entries without applicability windows are kept but can never match;
    /// a warning is logged for each. Entries that do not require salary
    /// disclosure are kept with a warning too.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateJurisdictionId`] if two entries derive
    /// the same id.
    pub fn build<I>(jurisdictions: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Jurisdiction>,
    {
        let mut registry: Self = Self::default();

        for jurisdiction in jurisdictions {
            let id: String = jurisdiction.id();
            if registry.index.contains_key(&id) {
                return Err(DomainError::DuplicateJurisdictionId(id));
            }
            if jurisdiction.when.is_empty() {
                warn!(id = %id, "Jurisdiction has no applicability windows and will never match");
            }
            if !jurisdiction.what.includes_salary() {
                warn!(id = %id, "Jurisdiction does not require salary disclosure");
            }
            registry.index.insert(id.clone(), registry.entries.len());
            registry.entries.push((id, jurisdiction));
        }

        info!(count = registry.entries.len(), "Built jurisdiction registry");
        Ok(registry)
    }

    /// Builds a registry from a JSON array of catalog entries.
    ///
    /// Unlike [`Self::build`], loading is strict: an entry without
    /// applicability windows is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The JSON does not describe a list of jurisdictions
    /// - An entry has no applicability windows
    /// - Two entries derive the same id
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let jurisdictions: Vec<Jurisdiction> =
            serde_json::from_str(json).map_err(|err| DomainError::InvalidCatalog {
                reason: err.to_string(),
            })?;

        if let Some(empty) = jurisdictions.iter().find(|j| j.when.is_empty()) {
            return Err(DomainError::MissingApplicabilityWindows(empty.id()));
        }

        Self::build(jurisdictions)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Jurisdiction> {
        self.index
            .get(id)
            .and_then(|position| self.entries.get(*position))
            .map(|(_, jurisdiction)| jurisdiction)
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates `(id, jurisdiction)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Jurisdiction)> {
        self.entries
            .iter()
            .map(|(id, jurisdiction)| (id.as_str(), jurisdiction))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the jurisdictions that are, or contain, the jurisdiction named by `id`.
    ///
    /// Placeholder ids and ids absent from the registry resolve to nothing.
    #[must_use]
    pub fn containing(&self, id: &str) -> Vec<&Jurisdiction> {
        let Some(target) = self.get(id) else {
            return Vec::new();
        };

        self.entries
            .iter()
            .map(|(_, jurisdiction)| jurisdiction)
            .filter(|jurisdiction| jurisdiction.is_or_contains(target))
            .collect()
    }
}

/// Every location id a user may pick: placeholders first, then each
/// concrete jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationRegistry {
    entries: Vec<AbstractJurisdiction>,
    index: HashMap<String, usize>,
}

impl LocationRegistry {
    /// Builds a location registry from placeholders and a jurisdiction registry.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateJurisdictionId`] if a placeholder id
    /// collides with another placeholder or with a jurisdiction id.
    pub fn new(
        placeholders: Vec<AbstractJurisdiction>,
        registry: &JurisdictionRegistry,
    ) -> Result<Self, DomainError> {
        let mut locations: Self = Self::default();

        let concrete = registry
            .iter()
            .map(|(_, jurisdiction)| AbstractJurisdiction::Concrete(jurisdiction.clone()));

        for location in placeholders.into_iter().chain(concrete) {
            let id: String = location.id();
            if locations.index.contains_key(&id) {
                return Err(DomainError::DuplicateJurisdictionId(id));
            }
            locations.index.insert(id, locations.entries.len());
            locations.entries.push(location);
        }

        Ok(locations)
    }

    /// Builds a location registry with the standard placeholders:
    /// "somewhere else", all of the US, and all of Canada.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_default_placeholders(registry: &JurisdictionRegistry) -> Result<Self, DomainError> {
        Self::new(
            vec![
                AbstractJurisdiction::Unknown,
                AbstractJurisdiction::all_us(),
                AbstractJurisdiction::all_canada(),
            ],
            registry,
        )
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AbstractJurisdiction> {
        self.index
            .get(id)
            .and_then(|position| self.entries.get(*position))
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbstractJurisdiction> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every location named by a fact set is known.
    ///
    /// Empty fields are left to the presence check. The user, company, and
    /// supervisor fields accept a concrete jurisdiction or the "somewhere
    /// else" placeholder; role locations also accept the remote placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownJurisdiction`] for the first id that is
    /// not accepted.
    pub fn check_known_locations(&self, fact_set: &FactSet) -> Result<(), DomainError> {
        for (field, id) in fact_set.anchor_locations() {
            if id.is_empty() || id == OTHER_LOCATION_ID {
                continue;
            }
            if !matches!(self.get(id), Some(AbstractJurisdiction::Concrete(_))) {
                return Err(DomainError::UnknownJurisdiction {
                    field,
                    id: id.to_string(),
                });
            }
        }

        for id in &fact_set.role_location {
            if !self.contains_id(id) {
                return Err(DomainError::UnknownJurisdiction {
                    field: "roleLocation",
                    id: id.clone(),
                });
            }
        }

        Ok(())
    }
}
