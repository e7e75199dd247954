use crate::rotation::{Rule, RuleCategory};
use crate::types::{Role, SpecKey};

/// Complete rotation of one class/spec, rules bucketed by category.
///
/// Buckets are indexed by [`RuleCategory::order`] and sorted by priority once
/// the owning table is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SpecRotation {
    pub key: SpecKey,
    pub display_name: String,
    pub description: String,
    pub role: Role,
    /// Preferred combat distance; 0 means "use the role default".
    pub preferred_range: f32,
    buckets: [Vec<Rule>; RuleCategory::COUNT],
}

impl SpecRotation {
    pub fn new(key: SpecKey, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            description: String::new(),
            role,
            preferred_range: 0.0,
            buckets: Default::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_preferred_range(mut self, range: f32) -> Self {
        self.preferred_range = range;
        self
    }

    /// Rules of one category in evaluation order.
    pub fn rules(&self, category: RuleCategory) -> &[Rule] {
        &self.buckets[category.order()]
    }

    /// Every rule, category by category.
    pub fn iter_rules(&self) -> impl Iterator<Item = &Rule> {
        self.buckets.iter().flatten()
    }

    pub fn rule_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub(crate) fn push(&mut self, rule: Rule) {
        self.buckets[rule.category.order()].push(rule);
    }

    pub(crate) fn sort_rules(&mut self) {
        // Stable: equal priorities keep insertion order.
        for bucket in &mut self.buckets {
            bucket.sort_by_key(|rule| rule.priority);
        }
    }
}
