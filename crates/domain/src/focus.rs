use strum::{EnumIter, IntoEnumIterator};

use crate::ExerciseDefinition;

/// Training focus recognised in a free-text focus label.
///
/// The variants are declared from most to least specific, as a label like "Pernas e Ombros" also
/// contains the keyword of the plain legs category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FocusCategory {
    FullBody,
    ChestAndTriceps,
    BackAndBiceps,
    LegsAndShoulders,
    UpperBody,
    LowerBody,
}

impl FocusCategory {
    #[must_use]
    pub fn classify(focus: &str) -> Option<Self> {
        let focus = focus.to_lowercase();
        Self::iter().find(|category| {
            category
                .labels()
                .iter()
                .any(|label| label.iter().all(|keyword| focus.contains(keyword)))
        })
    }

    #[must_use]
    pub fn matches(self, exercise_name: &str) -> bool {
        if self == FocusCategory::FullBody {
            return true;
        }
        let name = exercise_name.to_lowercase();
        self.exercise_keywords()
            .iter()
            .any(|keyword| name.contains(keyword))
    }

    // All keywords of one label must occur in the focus.
    fn labels(self) -> &'static [&'static [&'static str]] {
        match self {
            FocusCategory::FullBody => &[&["corpo inteiro"], &["full body"]],
            FocusCategory::ChestAndTriceps => &[&["peito", "tríceps"], &["chest", "triceps"]],
            FocusCategory::BackAndBiceps => &[&["costas", "bíceps"], &["back", "biceps"]],
            FocusCategory::LegsAndShoulders => &[&["pernas", "ombros"], &["legs", "shoulders"]],
            FocusCategory::UpperBody => &[&["superiores"], &["upper body"]],
            FocusCategory::LowerBody => &[
                &["pernas"],
                &["glúteos"],
                &["legs"],
                &["glutes"],
                &["lower body"],
            ],
        }
    }

    fn exercise_keywords(self) -> &'static [&'static str] {
        match self {
            FocusCategory::FullBody => &[],
            FocusCategory::ChestAndTriceps => {
                &["supino", "flexão", "cross", "voador", "tríceps", "mergulho"]
            }
            FocusCategory::BackAndBiceps => &["barra", "remada", "puxada", "rosca"],
            FocusCategory::LegsAndShoulders => &[
                "agachamento",
                "leg",
                "extensora",
                "stiff",
                "afundo",
                "mesa flexora",
                "desenvolvimento",
                "elevação",
                "remada alta",
            ],
            FocusCategory::UpperBody => &[
                "supino",
                "flexão",
                "cross",
                "voador",
                "barra",
                "remada",
                "puxada",
                "desenvolvimento",
                "elevação",
                "rosca",
                "tríceps",
                "mergulho",
            ],
            FocusCategory::LowerBody => &[
                "agachamento",
                "leg",
                "extensora",
                "stiff",
                "afundo",
                "mesa flexora",
            ],
        }
    }
}

/// Keeps the exercises belonging to the focus. An unknown focus keeps everything.
#[must_use]
pub fn filter_by_focus<'a>(
    focus: &str,
    exercises: &'a [ExerciseDefinition],
) -> Vec<&'a ExerciseDefinition> {
    match FocusCategory::classify(focus) {
        Some(category) => exercises
            .iter()
            .filter(|e| category.matches(e.name))
            .collect(),
        None => exercises.iter().collect(),
    }
}
