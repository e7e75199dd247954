use crate::rotation::{ConditionKind, RuleCategory, TargetKind};
use crate::types::ActionId;

/// One line of a rotation: "use `action` on `target` when `condition` holds".
///
/// Lower `priority` runs first inside its category; equal priorities keep
/// their declaration order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub action: ActionId,
    pub category: RuleCategory,
    pub priority: u16,
    pub target: TargetKind,
    pub condition: ConditionKind,
    pub condition_value: i32,
    pub display_name: String,
}

impl Rule {
    /// Unconditional rule with an empty display name.
    pub fn new(action: ActionId, category: RuleCategory, priority: u16, target: TargetKind) -> Self {
        Self {
            action,
            category,
            priority,
            target,
            condition: ConditionKind::None,
            condition_value: 0,
            display_name: String::new(),
        }
    }

    pub fn with_condition(mut self, condition: ConditionKind, value: i32) -> Self {
        self.condition = condition;
        self.condition_value = value;
        self
    }

    pub fn named(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Display name, or the action id when the row had none.
    pub fn label(&self) -> String {
        if self.display_name.is_empty() {
            format!("action {}", self.action)
        } else {
            self.display_name.clone()
        }
    }
}
