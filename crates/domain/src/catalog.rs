use std::collections::{BTreeMap, BTreeSet};

use crate::{BODYWEIGHT, Requirement, Term};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<ExerciseDefinition>,
    requirements: BTreeMap<&'static str, Requirement>,
}

pub(crate) static CATALOG: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| Catalog {
    exercises: EXERCISES.to_vec(),
    requirements: REQUIREMENTS.iter().map(|r| (r.exercise, *r)).collect(),
});

impl Catalog {
    pub fn new(
        exercises: Vec<ExerciseDefinition>,
        requirements: Vec<Requirement>,
    ) -> Result<Self, CatalogError> {
        let mut names = BTreeSet::new();
        for exercise in &exercises {
            if !names.insert(exercise.name) {
                return Err(CatalogError::DuplicateExercise(exercise.name));
            }
        }

        let mut mapped = BTreeMap::new();
        for requirement in requirements {
            if !names.contains(requirement.exercise) {
                return Err(CatalogError::UnknownExercise(requirement.exercise));
            }
            if requirement.terms.is_empty() {
                return Err(CatalogError::EmptyRequirement(requirement.exercise));
            }
            if requirement
                .terms
                .iter()
                .any(|t| matches!(t, Term::AnyOf(items) if items.is_empty()))
            {
                return Err(CatalogError::EmptyAlternative(requirement.exercise));
            }
            if mapped.insert(requirement.exercise, requirement).is_some() {
                return Err(CatalogError::DuplicateRequirement(requirement.exercise));
            }
        }

        Ok(Self {
            exercises,
            requirements: mapped,
        })
    }

    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &CATALOG
    }

    #[must_use]
    pub fn all_exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    /// Returns `None` for exercises which need nothing but bodyweight.
    #[must_use]
    pub fn requirements_for(&self, name: &str) -> Option<&Requirement> {
        self.requirements.get(name)
    }

    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definition(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        CATALOG.clone()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Exercise \"{0}\" is defined more than once")]
    DuplicateExercise(&'static str),
    #[error("Requirement refers to unknown exercise \"{0}\"")]
    UnknownExercise(&'static str),
    #[error("Requirement for \"{0}\" is defined more than once")]
    DuplicateRequirement(&'static str),
    #[error("Requirement for \"{0}\" has no terms")]
    EmptyRequirement(&'static str),
    #[error("Requirement for \"{0}\" contains an empty set of alternatives")]
    EmptyAlternative(&'static str),
}

const BENCH_OR_FURNITURE: &[&str] = &["Banco Reto", "Cadeira", "Sofá"];

const EXERCISES: [ExerciseDefinition; 25] = [
    // Chest
    ExerciseDefinition {
        name: "Supino Reto com Barra",
        sets: "3",
        reps: "8-12",
        description: "Deite-se no banco, segure a barra com as mãos um pouco mais afastadas que a largura dos ombros, desça a barra até o peito e empurre de volta à posição inicial.",
    },
    ExerciseDefinition {
        name: "Supino Inclinado com Halteres",
        sets: "3",
        reps: "10-15",
        description: "Em um banco inclinado, empurre os halteres acima do peito com as palmas voltadas para a frente e retorne de forma controlada.",
    },
    ExerciseDefinition {
        name: "Flexão de Braço",
        sets: "4",
        reps: "Até a falha",
        description: "Com as mãos no chão na largura dos ombros, desça até o peito quase tocar o chão e empurre de volta mantendo o corpo alinhado.",
    },
    ExerciseDefinition {
        name: "Cross Over",
        sets: "3",
        reps: "12-15",
        description: "Com as polias no alto, puxe os cabos para baixo e para a frente cruzando as mãos diante do corpo.",
    },
    ExerciseDefinition {
        name: "Voador",
        sets: "3",
        reps: "12-15",
        description: "Sentado na máquina, junte os braços à frente do corpo mantendo uma leve flexão nos cotovelos.",
    },
    // Back
    ExerciseDefinition {
        name: "Barra Fixa",
        sets: "3",
        reps: "Até a falha",
        description: "Pendurado na barra com as mãos afastadas, puxe o corpo até o queixo passar da barra.",
    },
    ExerciseDefinition {
        name: "Remada Curvada com Barra",
        sets: "4",
        reps: "8-12",
        description: "Com o tronco inclinado e as costas retas, puxe a barra em direção ao abdômen contraindo as costas.",
    },
    ExerciseDefinition {
        name: "Remada Serrote",
        sets: "3",
        reps: "10-12",
        description: "Com um joelho e uma mão apoiados, puxe o halter ao lado do corpo mantendo o cotovelo próximo ao tronco.",
    },
    ExerciseDefinition {
        name: "Puxada Frontal",
        sets: "3",
        reps: "10-15",
        description: "Sentado na máquina, puxe a barra para baixo em direção ao peito contraindo as costas.",
    },
    // Legs
    ExerciseDefinition {
        name: "Agachamento Livre",
        sets: "4",
        reps: "8-12",
        description: "Com a barra sobre os ombros, agache como se fosse sentar mantendo as costas retas e os joelhos alinhados com os pés.",
    },
    ExerciseDefinition {
        name: "Agachamento Búlgaro com Halteres",
        sets: "3",
        reps: "8-12",
        description: "Com o pé de trás apoiado no banco e um halter em cada mão, desça até a coxa da frente ficar paralela ao chão.",
    },
    ExerciseDefinition {
        name: "Agachamento com Peso Corporal",
        sets: "4",
        reps: "15-20",
        description: "Com os pés na largura dos ombros e os braços à frente, agache até as coxas ficarem paralelas ao chão e suba.",
    },
    ExerciseDefinition {
        name: "Leg Press",
        sets: "3",
        reps: "10-15",
        description: "Sentado na máquina, empurre a plataforma com os pés estendendo as pernas quase completamente.",
    },
    ExerciseDefinition {
        name: "Cadeira Extensora",
        sets: "3",
        reps: "12-15",
        description: "Sentado na máquina, estenda as pernas para levantar o peso focando na contração do quadríceps.",
    },
    ExerciseDefinition {
        name: "Mesa Flexora",
        sets: "3",
        reps: "10-12",
        description: "Deitado de bruços na máquina, flexione os joelhos trazendo o apoio em direção aos glúteos.",
    },
    ExerciseDefinition {
        name: "Stiff com Barra",
        sets: "3",
        reps: "10-12",
        description: "Segurando a barra, desça o tronco com as pernas quase retas sentindo o posterior da coxa alongar.",
    },
    ExerciseDefinition {
        name: "Afundo com Halteres",
        sets: "3",
        reps: "10-12",
        description: "Dê um passo à frente e flexione os dois joelhos até o joelho de trás quase tocar o chão.",
    },
    // Shoulders
    ExerciseDefinition {
        name: "Desenvolvimento com Halteres",
        sets: "4",
        reps: "10-12",
        description: "Sentado, empurre os halteres acima da cabeça até estender os braços.",
    },
    ExerciseDefinition {
        name: "Elevação Lateral com Halteres",
        sets: "3",
        reps: "12-15",
        description: "De pé, eleve os halteres para os lados até a altura dos ombros com os cotovelos levemente flexionados.",
    },
    ExerciseDefinition {
        name: "Remada Alta",
        sets: "3",
        reps: "10-12",
        description: "Puxe a barra ou os halteres em direção ao queixo conduzindo o movimento com os cotovelos.",
    },
    // Biceps
    ExerciseDefinition {
        name: "Rosca Direta com Barra",
        sets: "3",
        reps: "10-12",
        description: "De pé, segure a barra com as palmas para cima e leve-a em direção aos ombros sem balançar o corpo.",
    },
    ExerciseDefinition {
        name: "Rosca Alternada com Halteres",
        sets: "3",
        reps: "10-12",
        description: "De pé ou sentado, eleve um halter de cada vez girando o punho durante o movimento.",
    },
    // Triceps
    ExerciseDefinition {
        name: "Tríceps na Polia com Corda",
        sets: "3",
        reps: "12-15",
        description: "De pé, puxe a corda para baixo até estender os braços afastando as mãos no final.",
    },
    ExerciseDefinition {
        name: "Mergulho no Banco",
        sets: "3",
        reps: "Até a falha",
        description: "Com as mãos apoiadas em um banco, desça o corpo flexionando os cotovelos e empurre de volta.",
    },
    // Core
    ExerciseDefinition {
        name: "Prancha",
        sets: "3",
        reps: "30-60 s",
        description: "Apoiado nos antebraços e na ponta dos pés, mantenha o corpo reto e o abdômen contraído.",
    },
];

const REQUIREMENTS: [Requirement; 23] = [
    Requirement {
        exercise: "Supino Reto com Barra",
        terms: &[
            Term::Single("Barra Livre"),
            Term::Single("Banco Reto"),
            Term::Single("Anilhas"),
        ],
    },
    Requirement {
        exercise: "Supino Inclinado com Halteres",
        terms: &[Term::Single("Halteres"), Term::Single("Banco Inclinado")],
    },
    Requirement {
        exercise: "Flexão de Braço",
        terms: &[Term::Single(BODYWEIGHT)],
    },
    Requirement {
        exercise: "Cross Over",
        terms: &[Term::Single("Cross Over (Polia)")],
    },
    Requirement {
        exercise: "Voador",
        terms: &[Term::Single("Remada (Máquina)")],
    },
    // Assumes a pull-up bar in a park or at home
    Requirement {
        exercise: "Barra Fixa",
        terms: &[Term::Single(BODYWEIGHT)],
    },
    Requirement {
        exercise: "Remada Curvada com Barra",
        terms: &[Term::Single("Barra Livre"), Term::Single("Anilhas")],
    },
    Requirement {
        exercise: "Remada Serrote",
        terms: &[Term::Single("Halteres"), Term::AnyOf(BENCH_OR_FURNITURE)],
    },
    Requirement {
        exercise: "Puxada Frontal",
        terms: &[Term::Single("Puxador (Pulley)")],
    },
    Requirement {
        exercise: "Agachamento Livre",
        terms: &[
            Term::AnyOf(&["Barra Livre", "Smith Machine"]),
            Term::Single("Anilhas"),
        ],
    },
    Requirement {
        exercise: "Agachamento Búlgaro com Halteres",
        terms: &[Term::Single("Halteres"), Term::AnyOf(BENCH_OR_FURNITURE)],
    },
    Requirement {
        exercise: "Leg Press",
        terms: &[Term::Single("Leg Press")],
    },
    Requirement {
        exercise: "Cadeira Extensora",
        terms: &[Term::Single("Cadeira Extensora")],
    },
    Requirement {
        exercise: "Mesa Flexora",
        terms: &[Term::Single("Mesa Flexora")],
    },
    Requirement {
        exercise: "Stiff com Barra",
        terms: &[Term::Single("Barra Livre"), Term::Single("Anilhas")],
    },
    Requirement {
        exercise: "Afundo com Halteres",
        terms: &[Term::Single("Halteres")],
    },
    Requirement {
        exercise: "Desenvolvimento com Halteres",
        terms: &[
            Term::Single("Halteres"),
            Term::AnyOf(&["Banco Reto", "Banco Inclinado"]),
        ],
    },
    Requirement {
        exercise: "Elevação Lateral com Halteres",
        terms: &[Term::AnyOf(&[
            "Halteres",
            "Garrafas de Água/Sacos de Arroz",
            "Elásticos (Bands)",
        ])],
    },
    Requirement {
        exercise: "Remada Alta",
        terms: &[Term::AnyOf(&["Barra Livre", "Halteres", "Kettlebell"])],
    },
    Requirement {
        exercise: "Rosca Direta com Barra",
        terms: &[Term::Single("Barra Livre"), Term::Single("Anilhas")],
    },
    Requirement {
        exercise: "Rosca Alternada com Halteres",
        terms: &[Term::AnyOf(&["Halteres", "Garrafas de Água/Sacos de Arroz"])],
    },
    Requirement {
        exercise: "Tríceps na Polia com Corda",
        terms: &[Term::AnyOf(&["Puxador (Pulley)", "Cross Over (Polia)"])],
    },
    Requirement {
        exercise: "Mergulho no Banco",
        terms: &[Term::AnyOf(BENCH_OR_FURNITURE)],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const A: ExerciseDefinition = ExerciseDefinition {
        name: "A",
        sets: "3",
        reps: "10",
        description: "",
    };

    const B: ExerciseDefinition = ExerciseDefinition {
        name: "B",
        sets: "3",
        reps: "Até a falha",
        description: "",
    };

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(Catalog::new(EXERCISES.to_vec(), REQUIREMENTS.to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), EXERCISES.len());
        assert_eq!(catalog.all_exercises(), EXERCISES.as_slice());
    }

    #[test]
    fn test_builtin_catalog_bodyweight_exercises() {
        let catalog = Catalog::builtin();
        let unmapped = catalog
            .all_exercises()
            .iter()
            .filter(|e| catalog.requirements_for(e.name).is_none())
            .map(|e| e.name)
            .collect::<Vec<_>>();
        assert_eq!(unmapped, vec!["Agachamento com Peso Corporal", "Prancha"]);
    }

    #[test]
    fn test_requirements_for() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.requirements_for("Remada Serrote"),
            Some(&Requirement {
                exercise: "Remada Serrote",
                terms: &[Term::Single("Halteres"), Term::AnyOf(BENCH_OR_FURNITURE)],
            })
        );
        assert_eq!(catalog.requirements_for("Prancha"), None);
        assert_eq!(catalog.requirements_for("Unknown"), None);
    }

    #[test]
    fn test_definition() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.definition("Voador").map(|e| e.reps),
            Some("12-15")
        );
        assert!(catalog.contains("Leg Press"));
        assert!(!catalog.contains("leg press"));
    }

    #[test]
    fn test_new_duplicate_exercise() {
        assert_eq!(
            Catalog::new(vec![A, B, A], vec![]).unwrap_err(),
            CatalogError::DuplicateExercise("A")
        );
    }

    #[test]
    fn test_new_unknown_exercise() {
        assert_eq!(
            Catalog::new(
                vec![A],
                vec![Requirement {
                    exercise: "C",
                    terms: &[Term::Single("Halteres")],
                }]
            )
            .unwrap_err(),
            CatalogError::UnknownExercise("C")
        );
    }

    #[test]
    fn test_new_duplicate_requirement() {
        let requirement = Requirement {
            exercise: "A",
            terms: &[Term::Single("Halteres")],
        };
        assert_eq!(
            Catalog::new(vec![A], vec![requirement, requirement]).unwrap_err(),
            CatalogError::DuplicateRequirement("A")
        );
    }

    #[test]
    fn test_new_empty_requirement() {
        assert_eq!(
            Catalog::new(
                vec![A],
                vec![Requirement {
                    exercise: "A",
                    terms: &[],
                }]
            )
            .unwrap_err(),
            CatalogError::EmptyRequirement("A")
        );
    }

    #[test]
    fn test_new_empty_alternative() {
        assert_eq!(
            Catalog::new(
                vec![A, B],
                vec![Requirement {
                    exercise: "B",
                    terms: &[Term::Single("Halteres"), Term::AnyOf(&[])],
                }]
            )
            .unwrap_err(),
            CatalogError::EmptyAlternative("B")
        );
    }

    #[test]
    fn test_new_empty() {
        let catalog = Catalog::new(vec![], vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
