use std::{borrow::Cow, collections::BTreeSet};

use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::{Catalog, ExerciseDefinition};

pub const BODYWEIGHT: &str = "Peso Corporal";

#[derive(Deref, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSet(BTreeSet<String>);

impl EquipmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bodyweight_only() -> Self {
        Self::from([BODYWEIGHT])
    }

    /// An empty set stands for a user without any gear, who can still train with bodyweight.
    #[must_use]
    pub fn normalized(&self) -> Cow<'_, EquipmentSet> {
        if self.0.is_empty() {
            Cow::Owned(Self::bodyweight_only())
        } else {
            Cow::Borrowed(self)
        }
    }

    #[must_use]
    pub fn has_bodyweight(&self) -> bool {
        self.0.contains(BODYWEIGHT)
    }

    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        self.0.insert(item.into())
    }
}

impl<S: Into<String>> FromIterator<S> for EquipmentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for EquipmentSet {
    fn from(value: [S; N]) -> Self {
        value.into_iter().collect()
    }
}

/// One clause of an equipment requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// The item must be available.
    Single(&'static str),
    /// At least one of the items must be available.
    AnyOf(&'static [&'static str]),
}

impl Term {
    #[must_use]
    pub fn is_satisfied_by(self, equipment: &EquipmentSet) -> bool {
        self.resolve(equipment).is_some()
    }

    /// Returns the item that fulfils the term, preferring earlier alternatives.
    #[must_use]
    pub fn resolve(self, equipment: &EquipmentSet) -> Option<&'static str> {
        match self {
            Term::Single(item) => equipment.contains(item).then_some(item),
            Term::AnyOf(items) => items.iter().copied().find(|item| equipment.contains(*item)),
        }
    }
}

/// Conjunction of terms which an exercise needs to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub exercise: &'static str,
    pub terms: &'static [Term],
}

impl Requirement {
    #[must_use]
    pub fn is_satisfied_by(&self, equipment: &EquipmentSet) -> bool {
        self.terms.iter().all(|term| term.is_satisfied_by(equipment))
    }
}

#[must_use]
pub fn satisfies(requirement: Option<&Requirement>, equipment: &EquipmentSet) -> bool {
    let equipment = equipment.normalized();
    match requirement {
        Some(requirement) => requirement.is_satisfied_by(&equipment),
        None => equipment.has_bodyweight(),
    }
}

#[must_use]
pub fn filter_by_equipment<'a>(
    catalog: &Catalog,
    exercises: impl IntoIterator<Item = &'a ExerciseDefinition>,
    equipment: &EquipmentSet,
) -> Vec<&'a ExerciseDefinition> {
    let equipment = equipment.normalized();
    exercises
        .into_iter()
        .filter(|e| satisfies(catalog.requirements_for(e.name), &equipment))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub definition: ExerciseDefinition,
    pub equipment_used: Vec<String>,
}

#[must_use]
pub fn assign(
    catalog: &Catalog,
    definition: &ExerciseDefinition,
    equipment: &EquipmentSet,
) -> Assignment {
    Assignment {
        definition: *definition,
        equipment_used: equipment_used(catalog.requirements_for(definition.name), equipment),
    }
}

/// Lists the items used to fulfil the requirement, in declaration order and without duplicates.
#[must_use]
pub fn equipment_used(requirement: Option<&Requirement>, equipment: &EquipmentSet) -> Vec<String> {
    let equipment = equipment.normalized();
    let mut used: Vec<&str> = Vec::new();

    match requirement {
        Some(requirement) => {
            for item in requirement.terms.iter().filter_map(|t| t.resolve(&equipment)) {
                if !used.contains(&item) {
                    used.push(item);
                }
            }
        }
        None => {
            if equipment.has_bodyweight() {
                used.push(BODYWEIGHT);
            }
        }
    }

    used.into_iter().map(String::from).collect()
}
