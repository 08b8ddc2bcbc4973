use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Text shown in place of a hidden rule that has not been revealed yet.
pub const HIDDEN_RULE_PLACEHOLDER: &str = "???";

/// Immutable configuration of one level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelDefinition {
    pub id: LevelId,
    pub button_count: ButtonId,
    pub move_rule: MoveRule,
    pub completion_rule: CompletionRule,
}

impl LevelDefinition {
    pub const fn new(
        id: LevelId,
        button_count: ButtonId,
        move_rule: MoveRule,
        completion_rule: CompletionRule,
    ) -> Self {
        Self {
            id,
            button_count,
            move_rule,
            completion_rule,
        }
    }

    /// Initial buttons for a fresh attempt.
    pub fn layout(&self) -> ButtonList {
        numbered_buttons(self.button_count)
    }

    /// Hidden rules a failed attempt at this level discloses.
    pub fn hidden_rules(&self) -> impl Iterator<Item = RuleId> {
        [self.move_rule.hidden, self.completion_rule.hidden]
            .into_iter()
            .flatten()
    }

    /// Rule descriptions as the player sees them; unrevealed hidden rules are masked.
    pub fn rule_lines(&self, revealed: &RevealedRules) -> Vec<RuleLine> {
        let lines = [
            (self.completion_rule.description, self.completion_rule.hidden),
            (self.move_rule.description, self.move_rule.hidden),
        ];

        let mut result: Vec<RuleLine> = Vec::with_capacity(lines.len());
        for (description, hidden) in lines {
            let line = match hidden {
                Some(rule) if !revealed.is_revealed(rule) => RuleLine::Masked,
                Some(_) => RuleLine::Revealed(description),
                None => RuleLine::Visible(description),
            };
            if !result.contains(&line) {
                result.push(line);
            }
        }
        result
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RuleLine {
    Visible(&'static str),
    /// Hidden rule the player has already failed against.
    Revealed(&'static str),
    Masked,
}

impl RuleLine {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Visible(text) | Self::Revealed(text) => text,
            Self::Masked => HIDDEN_RULE_PLACEHOLDER,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Campaign {
    Standard,
    Legacy,
}

impl Default for Campaign {
    fn default() -> Self {
        Self::Standard
    }
}

const PRESS_ALL: CompletionRule =
    CompletionRule::visible(CompletionPredicate::AllPressed, "Press all buttons.");
const ODD_SEQUENCE: &[ButtonId] = &[1, 3, 5];

const INTRO: LevelDefinition = LevelDefinition::new(
    1,
    1,
    MoveRule::visible(MovePredicate::Unconstrained, "Press the button to complete the level."),
    CompletionRule::visible(
        CompletionPredicate::AllPressed,
        "Press the button to complete the level.",
    ),
);

const fn any_order(id: LevelId) -> LevelDefinition {
    LevelDefinition::new(
        id,
        5,
        MoveRule::visible(MovePredicate::Unconstrained, "Press all buttons in any order."),
        PRESS_ALL,
    )
}

const fn sequential(id: LevelId) -> LevelDefinition {
    LevelDefinition::new(
        id,
        5,
        MoveRule::visible(
            MovePredicate::Sequential,
            "Press all buttons in sequential order.",
        ),
        PRESS_ALL,
    )
}

const fn non_adjacent(id: LevelId) -> LevelDefinition {
    LevelDefinition::new(
        id,
        5,
        MoveRule::visible(
            MovePredicate::NonAdjacent,
            "Press all buttons in a non-adjacent order.",
        ),
        PRESS_ALL,
    )
}

const fn fixed_sequence(id: LevelId, move_rule: MoveRule) -> LevelDefinition {
    LevelDefinition::new(
        id,
        5,
        move_rule,
        CompletionRule::visible(
            CompletionPredicate::ExactSequence(ODD_SEQUENCE),
            "Press exactly the right buttons, then stop.",
        ),
    )
}

const fn odd_only(id: LevelId, move_rule: MoveRule) -> LevelDefinition {
    LevelDefinition::new(
        id,
        9,
        move_rule,
        CompletionRule::visible(
            CompletionPredicate::AllOddPressed,
            "Press every button that matters.",
        ),
    )
}

pub const RULE_NO_NEIGHBOURS: RuleId = RuleId::new("no-neighbours");
pub const RULE_ODD_STEPS: RuleId = RuleId::new("odd-steps");
pub const RULE_ODD_ONLY: RuleId = RuleId::new("odd-only");

const STANDARD_LEVELS: [LevelDefinition; 7] = [
    INTRO,
    any_order(101),
    sequential(102),
    non_adjacent(103),
    LevelDefinition::new(
        104,
        5,
        MoveRule::hidden(
            MovePredicate::NonAdjacent,
            "Never press a neighbour of the last button.",
            RULE_NO_NEIGHBOURS,
        ),
        PRESS_ALL,
    ),
    fixed_sequence(
        105,
        MoveRule::hidden(
            MovePredicate::FixedSequence(ODD_SEQUENCE),
            "Press 1, 3 and 5, in that order.",
            RULE_ODD_STEPS,
        ),
    ),
    odd_only(
        106,
        MoveRule::hidden(
            MovePredicate::OddOnly,
            "Only odd buttons may be pressed.",
            RULE_ODD_ONLY,
        ),
    ),
];

const LEGACY_LEVELS: [LevelDefinition; 6] = [
    INTRO,
    any_order(2),
    sequential(3),
    non_adjacent(4),
    fixed_sequence(
        5,
        MoveRule::visible(
            MovePredicate::FixedSequence(ODD_SEQUENCE),
            "Press 1, 3 and 5, in that order.",
        ),
    ),
    odd_only(
        6,
        MoveRule::visible(MovePredicate::OddOnly, "Only odd buttons may be pressed."),
    ),
];

/// Lookup table from level id to its definition, in campaign order.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelRegistry {
    campaign: Campaign,
    order: Vec<LevelId>,
    levels: BTreeMap<LevelId, LevelDefinition>,
}

impl LevelRegistry {
    pub fn new(campaign: Campaign) -> Self {
        match campaign {
            Campaign::Standard => Self::from_levels(campaign, &STANDARD_LEVELS),
            Campaign::Legacy => Self::from_levels(campaign, &LEGACY_LEVELS),
        }
    }

    pub fn standard() -> Self {
        Self::new(Campaign::Standard)
    }

    pub fn legacy() -> Self {
        Self::new(Campaign::Legacy)
    }

    /// Builds a registry from definitions in play order; later duplicates replace earlier ones.
    pub fn from_levels(campaign: Campaign, definitions: &[LevelDefinition]) -> Self {
        let mut order = Vec::with_capacity(definitions.len());
        let mut levels = BTreeMap::new();
        for &definition in definitions {
            if levels.insert(definition.id, definition).is_none() {
                order.push(definition.id);
            }
        }
        Self {
            campaign,
            order,
            levels,
        }
    }

    pub fn campaign(&self) -> Campaign {
        self.campaign
    }

    pub fn get(&self, id: LevelId) -> Result<&LevelDefinition> {
        self.levels.get(&id).ok_or(GameError::UnknownLevel(id))
    }

    pub fn contains(&self, id: LevelId) -> bool {
        self.levels.contains_key(&id)
    }

    pub fn layout(&self, id: LevelId) -> Result<ButtonList> {
        self.get(id).map(LevelDefinition::layout)
    }

    /// Level ids in play order.
    pub fn levels(&self) -> &[LevelId] {
        &self.order
    }

    pub fn first_level(&self) -> LevelId {
        self.order.first().copied().unwrap_or(INTRO.id)
    }

    pub fn next_level(&self, id: LevelId) -> Option<LevelId> {
        let position = self.order.iter().position(|&level| level == id)?;
        self.order.get(position + 1).copied()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
