use alloc::collections::BTreeSet;
use core::fmt;

/// Stable name of a hidden rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(&'static str);

impl RuleId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Hidden rules the player has already run into during this session.
///
/// Owned by whoever drives the session and handed to the controller and the
/// rules view explicitly. Only grows until [`RevealedRules::reset`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedRules {
    revealed: BTreeSet<RuleId>,
}

impl RevealedRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the rule was not revealed before.
    pub fn reveal(&mut self, rule: RuleId) -> bool {
        let newly_revealed = self.revealed.insert(rule);
        if newly_revealed {
            log::debug!("revealed hidden rule: {}", rule);
        }
        newly_revealed
    }

    pub fn is_revealed(&self, rule: RuleId) -> bool {
        self.revealed.contains(&rule)
    }

    pub fn reset(&mut self) {
        self.revealed.clear();
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.revealed.iter().copied()
    }
}
