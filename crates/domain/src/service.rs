use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Catalog, EquipmentSet, Exercise, FallbackChain, Settings, SettingsError, TIERS, Tier,
    WeeklyPlan, WorkoutPlan, assemble_plan, assemble_weekly_plan, assign, pick_choices, pick_one,
};

pub trait PlannerService {
    fn generate_plan(&self, duration: u32, focus: &str, equipment: &EquipmentSet) -> WorkoutPlan;
    fn generate_weekly_plan(&self) -> WeeklyPlan;
    fn auto_swap_exercise(
        &self,
        current_plan: &WorkoutPlan,
        exercise_to_replace: &Exercise,
        equipment: &EquipmentSet,
        focus: &str,
    ) -> Exercise;
    fn get_similar_choices(
        &self,
        current_plan: &WorkoutPlan,
        exercise_to_replace: &Exercise,
        equipment: &EquipmentSet,
        focus: &str,
    ) -> Vec<Exercise>;
}

pub struct Service<G = StdRng> {
    catalog: Catalog,
    settings: Settings,
    fallback: FallbackChain,
    rng: Mutex<G>,
}

impl Service<StdRng> {
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        Self::with_rng(Catalog::default(), settings, StdRng::from_entropy())
    }
}

impl<G: Rng> Service<G> {
    pub fn with_rng(catalog: Catalog, settings: Settings, rng: G) -> Result<Self, SettingsError> {
        settings.validate()?;

        if catalog.is_empty() {
            warn!("exercise catalog is empty");
        }

        Ok(Self {
            fallback: FallbackChain::new(TIERS, settings.min_candidates),
            catalog,
            settings,
            rng: Mutex::new(rng),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn rng(&self) -> MutexGuard<'_, G> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G: Rng> PlannerService for Service<G> {
    fn generate_plan(&self, duration: u32, focus: &str, equipment: &EquipmentSet) -> WorkoutPlan {
        let count = self.settings.session_sizes.exercise_count(duration);
        let mut rng = self.rng();
        let selection = self
            .fallback
            .select(&self.catalog, focus, equipment, count, &mut *rng);

        if selection.tier == Tier::CatalogBodyweight {
            warn!("no exercise for focus \"{focus}\" and given equipment, using bodyweight exercises");
        }
        if selection.exercises.is_empty() {
            warn!("generated plan without exercises");
        }

        let assignments = selection
            .exercises
            .iter()
            .map(|e| assign(&self.catalog, e, &selection.equipment))
            .collect();
        let plan = assemble_plan(&self.settings, duration, focus, assignments, &mut *rng);

        debug!(
            "generated plan \"{}\" with {} exercises ({:?})",
            plan.title,
            plan.exercises.len(),
            selection.tier
        );

        plan
    }

    fn generate_weekly_plan(&self) -> WeeklyPlan {
        let weekly_plan = assemble_weekly_plan(
            &self.catalog,
            self.settings.weekly_day_size,
            &mut *self.rng(),
        );

        debug!("generated weekly plan with {} plans", weekly_plan.plans.len());

        weekly_plan
    }

    fn auto_swap_exercise(
        &self,
        current_plan: &WorkoutPlan,
        exercise_to_replace: &Exercise,
        equipment: &EquipmentSet,
        focus: &str,
    ) -> Exercise {
        let exercise = pick_one(
            &self.catalog,
            current_plan,
            exercise_to_replace,
            equipment,
            focus,
            &mut *self.rng(),
        );

        debug!(
            "swapped \"{}\" for \"{}\"",
            exercise_to_replace.name, exercise.name
        );

        exercise
    }

    fn get_similar_choices(
        &self,
        current_plan: &WorkoutPlan,
        exercise_to_replace: &Exercise,
        equipment: &EquipmentSet,
        focus: &str,
    ) -> Vec<Exercise> {
        let choices = pick_choices(
            &self.catalog,
            current_plan,
            exercise_to_replace,
            equipment,
            focus,
            self.settings.similar_choices,
            &mut *self.rng(),
        );

        debug!(
            "found {} choices to replace \"{}\"",
            choices.len(),
            exercise_to_replace.name
        );

        choices
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use crate::{BODYWEIGHT, ExerciseDefinition, FocusCategory, REST_DAY, SessionSizes, Term};

    use super::*;

    fn service(seed: u64) -> Service<ChaCha8Rng> {
        Service::with_rng(
            Catalog::default(),
            Settings::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_service_new() {
        assert!(Service::new(Settings::default()).is_ok());
    }

    #[test]
    fn test_service_new_invalid_settings() {
        assert_eq!(
            Service::new(Settings {
                similar_choices: 0,
                ..Settings::default()
            })
            .err(),
            Some(SettingsError::Zero("similar_choices"))
        );
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Service>();
    }

    #[test]
    fn test_generate_plan_legs_and_shoulders() {
        let plan = service(0).generate_plan(
            45,
            "Pernas e Ombros",
            &EquipmentSet::from(["Halteres", "Banco Reto"]),
        );

        assert_eq!(plan.title, "Treino FocoTotal - Pernas e Ombros");
        assert_eq!(plan.duration, 45);
        assert_eq!(plan.focus, "Pernas e Ombros");
        assert_eq!(plan.exercises.len(), 5);
        for exercise in &plan.exercises {
            assert!(FocusCategory::LegsAndShoulders.matches(&exercise.name));
            assert!(!exercise.equipment_used.is_empty());
        }
        let ids = plan.exercises.iter().map(|e| e.id).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), 5);
    }

    #[rstest]
    #[case(30, 4)]
    #[case(45, 5)]
    #[case(60, 6)]
    fn test_generate_plan_size_with_full_gym(#[case] duration: u32, #[case] expected: usize) {
        let equipment = EquipmentSet::from([
            BODYWEIGHT,
            "Barra Livre",
            "Anilhas",
            "Banco Reto",
            "Banco Inclinado",
            "Halteres",
            "Puxador (Pulley)",
            "Cross Over (Polia)",
        ]);
        let plan = service(0).generate_plan(duration, "Membros Superiores", &equipment);

        assert_eq!(plan.exercises.len(), expected);
    }

    #[rstest]
    #[case("Corpo Inteiro")]
    #[case("Peito e Tríceps")]
    #[case("Costas e Bíceps")]
    #[case("Pernas e Ombros")]
    #[case("Cardio")]
    fn test_generate_plan_without_equipment(#[case] focus: &str) {
        let service = service(3);
        let plan = service.generate_plan(30, focus, &EquipmentSet::new());

        assert!(!plan.exercises.is_empty());
        for exercise in &plan.exercises {
            let requirement = service.catalog().requirements_for(&exercise.name);
            assert!(requirement.is_none_or(|r| r.terms.contains(&Term::Single(BODYWEIGHT))));
            assert_eq!(exercise.equipment_used, vec![BODYWEIGHT]);
        }
    }

    #[test]
    fn test_generate_plan_never_empty() {
        let service = service(5);
        let equipment_sets = [
            EquipmentSet::new(),
            EquipmentSet::from(["Kettlebell"]),
            EquipmentSet::from(["Leg Press", "Cadeira Extensora"]),
            EquipmentSet::from(["Elásticos (Bands)"]),
        ];

        for equipment in &equipment_sets {
            for focus in ["Peito e Tríceps", "Pernas", "Membros Superiores", "Yoga"] {
                for duration in [20, 45, 75] {
                    let plan = service.generate_plan(duration, focus, equipment);
                    assert!(!plan.exercises.is_empty(), "{focus} {duration} {equipment:?}");
                }
            }
        }
    }

    #[test]
    fn test_generate_plan_empty_catalog() {
        let service = Service::with_rng(
            Catalog::new(vec![], vec![]).unwrap(),
            Settings::default(),
            ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();

        assert!(
            service
                .generate_plan(30, "Pernas", &EquipmentSet::new())
                .exercises
                .is_empty()
        );
    }

    #[test]
    fn test_generate_plan_custom_settings() {
        let service = Service::with_rng(
            Catalog::default(),
            Settings {
                brand: String::from("Treino X"),
                session_sizes: SessionSizes {
                    short_count: 2,
                    ..SessionSizes::default()
                },
                ..Settings::default()
            },
            ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();

        let plan = service.generate_plan(20, "Corpo Inteiro", &EquipmentSet::new());

        assert_eq!(plan.title, "Treino X - Corpo Inteiro");
        assert_eq!(plan.exercises.len(), 2);
    }

    #[test]
    fn test_generate_plan_deterministic() {
        let equipment = EquipmentSet::from(["Halteres", "Barra Livre", "Anilhas"]);
        assert_eq!(
            service(9).generate_plan(60, "Corpo Inteiro", &equipment),
            service(9).generate_plan(60, "Corpo Inteiro", &equipment)
        );
    }

    #[test]
    fn test_generate_weekly_plan() {
        let weekly_plan = service(0).generate_weekly_plan();

        assert_eq!(weekly_plan.schedule.thursday, REST_DAY);
        assert_eq!(weekly_plan.schedule.sunday, REST_DAY);
        assert_eq!(weekly_plan.plans.len(), 4);
        assert_eq!(
            weekly_plan
                .plans
                .iter()
                .filter(|p| p.name == REST_DAY)
                .count(),
            1
        );
        assert_eq!(
            weekly_plan.plan_for(Weekday::Fri),
            weekly_plan.plan_for(Weekday::Mon)
        );
        for plan in &weekly_plan.plans[..3] {
            assert_eq!(plan.exercises.len(), 5);
        }
    }

    #[test]
    fn test_auto_swap_exercise() {
        let service = service(0);
        let equipment = EquipmentSet::from(["Halteres", "Banco Reto"]);
        let mut plan = service.generate_plan(45, "Pernas e Ombros", &equipment);
        let exercise_to_replace = plan.exercises[2].clone();

        let exercise =
            service.auto_swap_exercise(&plan, &exercise_to_replace, &equipment, "Pernas e Ombros");

        assert_ne!(exercise.name, exercise_to_replace.name);
        assert!(!plan.contains(&exercise.name));
        assert_eq!(
            plan.replace_exercise(exercise_to_replace.id, exercise.clone()),
            Ok(exercise_to_replace)
        );
        assert_eq!(plan.exercises[2], exercise);
    }

    #[test]
    fn test_auto_swap_exercise_without_alternative() {
        let service = service(0);
        let equipment = EquipmentSet::new();
        let plan = WorkoutPlan {
            title: String::from("Treino"),
            duration: 30,
            focus: String::from("Cardio"),
            exercises: ["Flexão de Braço", "Barra Fixa", "Agachamento com Peso Corporal", "Prancha"]
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let definition: &ExerciseDefinition =
                        service.catalog().definition(name).unwrap();
                    Exercise::new(
                        (i as u128 + 1).into(),
                        assign(service.catalog(), definition, &equipment),
                    )
                })
                .collect(),
        };

        let exercise = service.auto_swap_exercise(&plan, &plan.exercises[3], &equipment, "Cardio");

        assert_eq!(exercise.name, "Prancha");
        assert_eq!(exercise.equipment_used, vec![BODYWEIGHT]);
        assert!(
            service
                .get_similar_choices(&plan, &plan.exercises[3], &equipment, "Cardio")
                .is_empty()
        );
    }

    #[test]
    fn test_get_similar_choices() {
        let service = service(0);
        let equipment = EquipmentSet::from(["Halteres", "Banco Reto", BODYWEIGHT]);
        let plan = service.generate_plan(30, "Costas e Bíceps", &equipment);

        let choices =
            service.get_similar_choices(&plan, &plan.exercises[0], &equipment, "Costas e Bíceps");

        assert!(!choices.is_empty());
        assert!(choices.len() <= 2);
        for choice in &choices {
            assert!(!plan.contains(&choice.name));
        }
    }
}
