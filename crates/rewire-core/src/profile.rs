//! User profile.
//!
//! Created at onboarding completion, edited from settings, and owned
//! exclusively by the current device. Every field round-trips as a plain
//! JSON number/string/boolean so the state document stays portable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::stats::{DEFAULT_CIGS_PER_PACK, DEFAULT_PACK_PRICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Quit,
    Reduce,
}

/// Self-reported nicotine dependency band from onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DependencyLevel {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub goal: GoalType,
    /// Reference timestamp for abstinence metrics. Optional: a
    /// reduce-goal user may not have committed to a date yet.
    pub quit_date: Option<DateTime<Utc>>,
    /// Pre-quit daily consumption.
    pub baseline_cigs_per_day: u32,
    pub dependency: DependencyLevel,
    pub triggers: Vec<String>,
    pub reasons: Vec<String>,
    pub pack_price: f64,
    pub cigs_per_pack: u32,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile with product defaults; not yet onboarded.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goal: GoalType::Quit,
            quit_date: None,
            baseline_cigs_per_day: 0,
            dependency: DependencyLevel::default(),
            triggers: Vec::new(),
            reasons: Vec::new(),
            pack_price: DEFAULT_PACK_PRICE,
            cigs_per_pack: DEFAULT_CIGS_PER_PACK,
            onboarding_complete: false,
            created_at: Utc::now(),
        }
    }

    /// Validate the profile for onboarding completion. Once
    /// `onboarding_complete` is set the profile is never partially valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "must not be empty".into(),
            });
        }
        if self.pack_price < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "pack_price".into(),
                message: "must not be negative".into(),
            });
        }
        if self.goal == GoalType::Quit && self.quit_date.is_none() {
            return Err(ValidationError::InvalidValue {
                field: "quit_date".into(),
                message: "required for a quit goal".into(),
            });
        }
        Ok(())
    }

    /// Validate and mark onboarding complete.
    pub fn complete_onboarding(&mut self) -> Result<(), ValidationError> {
        self.validate()?;
        self.onboarding_complete = true;
        Ok(())
    }
}
