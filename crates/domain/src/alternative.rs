use log::warn;
use rand::Rng;

use crate::{
    Catalog, EquipmentSet, Exercise, ExerciseDefinition, ExerciseID, WorkoutPlan, assign,
    equipment_used, filter_by_equipment, filter_by_focus, sample,
};

/// Finds exercises which could replace `exercise_to_replace`.
///
/// Exercises already contained in the plan are never proposed. If the focus leaves no
/// alternative, the whole catalog is searched.
#[must_use]
pub fn find_alternatives<'a>(
    catalog: &'a Catalog,
    current_plan: &WorkoutPlan,
    exercise_to_replace: &Exercise,
    equipment: &EquipmentSet,
    focus: &str,
) -> Vec<&'a ExerciseDefinition> {
    let is_eligible = |e: &&ExerciseDefinition| {
        e.name != exercise_to_replace.name && !current_plan.contains(e.name)
    };

    let alternatives = filter_by_equipment(
        catalog,
        filter_by_focus(focus, catalog.all_exercises()),
        equipment,
    )
    .into_iter()
    .filter(is_eligible)
    .collect::<Vec<_>>();

    if !alternatives.is_empty() {
        return alternatives;
    }

    filter_by_equipment(catalog, catalog.all_exercises(), equipment)
        .into_iter()
        .filter(is_eligible)
        .collect()
}

/// Picks a single replacement, falling back to the replaced exercise itself.
#[must_use]
pub fn pick_one<R: Rng + ?Sized>(
    catalog: &Catalog,
    current_plan: &WorkoutPlan,
    exercise_to_replace: &Exercise,
    equipment: &EquipmentSet,
    focus: &str,
    rng: &mut R,
) -> Exercise {
    let alternatives =
        find_alternatives(catalog, current_plan, exercise_to_replace, equipment, focus);

    if let Some(definition) = sample(&alternatives, 1, rng).into_iter().next() {
        return Exercise::new(
            ExerciseID::random(rng),
            assign(catalog, definition, equipment),
        );
    }

    warn!(
        "no alternative to \"{}\" available, keeping exercise",
        exercise_to_replace.name
    );

    Exercise {
        id: ExerciseID::random(rng),
        name: exercise_to_replace.name.clone(),
        sets: exercise_to_replace.sets.clone(),
        reps: exercise_to_replace.reps.clone(),
        description: exercise_to_replace.description.clone(),
        equipment_used: equipment_used(
            catalog.requirements_for(&exercise_to_replace.name),
            equipment,
        ),
    }
}

/// Picks up to `count` distinct replacements to choose from.
#[must_use]
pub fn pick_choices<R: Rng + ?Sized>(
    catalog: &Catalog,
    current_plan: &WorkoutPlan,
    exercise_to_replace: &Exercise,
    equipment: &EquipmentSet,
    focus: &str,
    count: usize,
    rng: &mut R,
) -> Vec<Exercise> {
    let alternatives =
        find_alternatives(catalog, current_plan, exercise_to_replace, equipment, focus);

    sample(&alternatives, count, rng)
        .into_iter()
        .map(|definition| {
            Exercise::new(
                ExerciseID::random(rng),
                assign(catalog, definition, equipment),
            )
        })
        .collect()
}
