//! If-then planning rules: a trigger situation paired with the response
//! the user rehearses instead of smoking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IfThenRule {
    pub id: Uuid,
    pub if_trigger: String,
    pub then_action: String,
    pub active: bool,
}

impl IfThenRule {
    pub fn new(if_trigger: impl Into<String>, then_action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            if_trigger: if_trigger.into(),
            then_action: then_action.into(),
            active: true,
        }
    }
}

/// Flip a rule's active flag. Returns the new state, or `None` if no rule
/// has that id.
pub fn toggle_rule(rules: &mut [IfThenRule], id: Uuid) -> Option<bool> {
    let rule = rules.iter_mut().find(|r| r.id == id)?;
    rule.active = !rule.active;
    Some(rule.active)
}

/// Remove a rule by id. Returns whether one was removed.
pub fn remove_rule(rules: &mut Vec<IfThenRule>, id: Uuid) -> bool {
    let before = rules.len();
    rules.retain(|r| r.id != id);
    rules.len() != before
}

pub fn active_rules(rules: &[IfThenRule]) -> Vec<&IfThenRule> {
    rules.iter().filter(|r| r.active).collect()
}
