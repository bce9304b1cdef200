use chrono::Weekday;
use derive_more::{Deref, Display};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Assignment, Catalog, ExerciseDefinition, Settings, filter_by_focus, sample};

pub const REST_DAY: &str = "Descanso";

const WEEKLY_SPLIT: [(&str, &str); 3] = [
    ("Treino A: Peito e Tríceps", "Peito e Tríceps"),
    ("Treino B: Costas e Bíceps", "Costas e Bíceps"),
    ("Treino C: Pernas e Ombros", "Pernas e Ombros"),
];

#[derive(
    Deref,
    Debug,
    Display,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Creates a version 4 UUID from the given generator.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0; 16];
        rng.fill(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub description: String,
    pub equipment_used: Vec<String>,
}

impl Exercise {
    #[must_use]
    pub fn new(id: ExerciseID, assignment: Assignment) -> Self {
        let Assignment {
            definition,
            equipment_used,
        } = assignment;
        Self {
            id,
            name: definition.name.to_string(),
            sets: definition.sets.to_string(),
            reps: definition.reps.to_string(),
            description: definition.description.to_string(),
            equipment_used,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub description: String,
}

impl From<&ExerciseDefinition> for ExerciseTemplate {
    fn from(value: &ExerciseDefinition) -> Self {
        Self {
            name: value.name.to_string(),
            sets: value.sets.to_string(),
            reps: value.reps.to_string(),
            description: value.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub title: String,
    pub duration: u32,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.exercises.iter().any(|e| e.name == name)
    }

    /// Puts the replacement at the position of the exercise with the given ID and returns the
    /// replaced exercise.
    pub fn replace_exercise(
        &mut self,
        id: ExerciseID,
        replacement: Exercise,
    ) -> Result<Exercise, PlanError> {
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(PlanError::NotFound(id))?;
        Ok(std::mem::replace(exercise, replacement))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("Plan contains no exercise with ID {0}")]
    NotFound(ExerciseID),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub name: String,
    pub exercises: Vec<ExerciseTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Schedule {
    #[must_use]
    pub fn plan_name(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub plans: Vec<DayPlan>,
    pub schedule: Schedule,
}

impl WeeklyPlan {
    #[must_use]
    pub fn plan_for(&self, day: Weekday) -> Option<&DayPlan> {
        let name = self.schedule.plan_name(day);
        self.plans.iter().find(|p| p.name == name)
    }
}

#[must_use]
pub fn assemble_plan<R: Rng + ?Sized>(
    settings: &Settings,
    duration: u32,
    focus: &str,
    assignments: Vec<Assignment>,
    rng: &mut R,
) -> WorkoutPlan {
    WorkoutPlan {
        title: settings.title(focus),
        duration,
        focus: focus.to_string(),
        exercises: assignments
            .into_iter()
            .map(|a| Exercise::new(ExerciseID::random(rng), a))
            .collect(),
    }
}

/// Creates an A/B/C split without equipment annotation.
#[must_use]
pub fn assemble_weekly_plan<R: Rng + ?Sized>(
    catalog: &Catalog,
    day_size: usize,
    rng: &mut R,
) -> WeeklyPlan {
    let mut plans = WEEKLY_SPLIT
        .iter()
        .map(|(name, focus)| DayPlan {
            name: (*name).to_string(),
            exercises: sample(&filter_by_focus(focus, catalog.all_exercises()), day_size, rng)
                .into_iter()
                .map(ExerciseTemplate::from)
                .collect(),
        })
        .collect::<Vec<_>>();
    plans.push(DayPlan {
        name: REST_DAY.to_string(),
        exercises: vec![],
    });

    let [a, b, c] = WEEKLY_SPLIT.map(|(name, _)| name.to_string());

    WeeklyPlan {
        plans,
        schedule: Schedule {
            monday: a.clone(),
            tuesday: b.clone(),
            wednesday: c,
            thursday: REST_DAY.to_string(),
            friday: a,
            saturday: b,
            sunday: REST_DAY.to_string(),
        },
    }
}
