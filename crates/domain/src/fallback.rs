use rand::Rng;

use crate::{
    BODYWEIGHT, Catalog, EquipmentSet, ExerciseDefinition, filter_by_equipment, filter_by_focus,
    sample,
};

/// Stage of increasingly relaxed filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Exercises of the focus which can be done with the available equipment.
    Primary,
    /// Adds bodyweight exercises of the focus if too few exercises match the equipment.
    BroadenedEquipment,
    /// Bodyweight exercises of the whole catalog, if nothing could be selected so far.
    CatalogBodyweight,
}

pub const TIERS: [Tier; 3] = [
    Tier::Primary,
    Tier::BroadenedEquipment,
    Tier::CatalogBodyweight,
];

impl Tier {
    fn applies(self, selection: &Selection<'_>, min_candidates: usize) -> bool {
        match self {
            Tier::Primary => true,
            Tier::BroadenedEquipment => {
                selection.candidates.len() < min_candidates && selection.equipment.has_bodyweight()
            }
            Tier::CatalogBodyweight => selection.exercises.is_empty(),
        }
    }

    fn candidates<'a>(
        self,
        catalog: &'a Catalog,
        focus: &str,
        selection: &Selection<'a>,
    ) -> Vec<&'a ExerciseDefinition> {
        match self {
            Tier::Primary => filter_by_equipment(
                catalog,
                filter_by_focus(focus, catalog.all_exercises()),
                &selection.equipment,
            ),
            Tier::BroadenedEquipment => {
                let mut candidates = selection.candidates.clone();
                for exercise in filter_by_equipment(
                    catalog,
                    filter_by_focus(focus, catalog.all_exercises()),
                    &EquipmentSet::bodyweight_only(),
                ) {
                    if !candidates.iter().any(|c| c.name == exercise.name) {
                        candidates.push(exercise);
                    }
                }
                candidates
            }
            Tier::CatalogBodyweight => filter_by_equipment(
                catalog,
                catalog.all_exercises(),
                &EquipmentSet::bodyweight_only(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Last tier which has been entered.
    pub tier: Tier,
    pub candidates: Vec<&'a ExerciseDefinition>,
    pub exercises: Vec<&'a ExerciseDefinition>,
    /// Equipment against which the selected exercises are annotated.
    pub equipment: EquipmentSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackChain {
    tiers: Vec<Tier>,
    min_candidates: usize,
}

impl FallbackChain {
    #[must_use]
    pub fn new(tiers: impl Into<Vec<Tier>>, min_candidates: usize) -> Self {
        Self {
            tiers: tiers.into(),
            min_candidates,
        }
    }

    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Selects up to `count` exercises by entering each tier whose condition holds for the
    /// selection of the preceding tiers.
    #[must_use]
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        catalog: &'a Catalog,
        focus: &str,
        equipment: &EquipmentSet,
        count: usize,
        rng: &mut R,
    ) -> Selection<'a> {
        let mut selection = Selection {
            tier: Tier::Primary,
            candidates: vec![],
            exercises: vec![],
            equipment: equipment.normalized().into_owned(),
        };

        for tier in &self.tiers {
            if !tier.applies(&selection, self.min_candidates) {
                continue;
            }
            selection.candidates = tier.candidates(catalog, focus, &selection);
            selection.exercises = sample(&selection.candidates, count, rng);
            selection.tier = *tier;
            if *tier == Tier::CatalogBodyweight {
                selection.equipment.insert(BODYWEIGHT);
            }
        }

        selection
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new(TIERS, 4)
    }
}
