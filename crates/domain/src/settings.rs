use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prefix of every generated plan title.
    pub brand: String,
    pub session_sizes: SessionSizes,
    /// Below this number of matching exercises, bodyweight exercises are added to the candidates.
    pub min_candidates: usize,
    pub weekly_day_size: usize,
    pub similar_choices: usize,
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.session_sizes.validate()?;

        if self.weekly_day_size == 0 {
            return Err(SettingsError::Zero("weekly_day_size"));
        }

        if self.similar_choices == 0 {
            return Err(SettingsError::Zero("similar_choices"));
        }

        Ok(())
    }

    #[must_use]
    pub fn title(&self, focus: &str) -> String {
        format!("{} - {focus}", self.brand)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brand: String::from("Treino FocoTotal"),
            session_sizes: SessionSizes::default(),
            min_candidates: 4,
            weekly_day_size: 5,
            similar_choices: 2,
        }
    }
}

/// Number of exercises in a session depending on its duration in minutes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SessionSizes {
    pub short_minutes: u32,
    pub short_count: usize,
    pub medium_minutes: u32,
    pub medium_count: usize,
    pub long_count: usize,
}

impl SessionSizes {
    #[must_use]
    pub fn exercise_count(&self, duration: u32) -> usize {
        if duration < self.short_minutes {
            self.short_count
        } else if duration < self.medium_minutes {
            self.medium_count
        } else {
            self.long_count
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.short_minutes >= self.medium_minutes {
            return Err(SettingsError::ThresholdOrder {
                short: self.short_minutes,
                medium: self.medium_minutes,
            });
        }

        for (field, count) in [
            ("short_count", self.short_count),
            ("medium_count", self.medium_count),
            ("long_count", self.long_count),
        ] {
            if count == 0 {
                return Err(SettingsError::Zero(field));
            }
        }

        Ok(())
    }
}

impl Default for SessionSizes {
    fn default() -> Self {
        Self {
            short_minutes: 40,
            short_count: 4,
            medium_minutes: 55,
            medium_count: 5,
            long_count: 6,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("Session thresholds must be increasing ({short} >= {medium})")]
    ThresholdOrder { short: u32, medium: u32 },
}
