//! Move-legality and completion predicates.
//!
//! Predicates are pure: they look at the buttons and the history of accepted
//! presses and never mutate either. [`Rule`] pairs a predicate with the text the
//! player sees for it and, optionally, the id of a hidden rule.

use crate::{Button, ButtonId, RuleId};

/// Gate evaluated for every press, before the button changes state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovePredicate {
    /// Any press is legal.
    Unconstrained,
    /// Consecutive ids with a constant step of +1 or -1, starting anywhere.
    Sequential,
    /// Never press a direct neighbour of the previously pressed button.
    NonAdjacent,
    /// Only odd ids may be pressed.
    OddOnly,
    /// Ids must follow this list exactly.
    FixedSequence(&'static [ButtonId]),
}

impl MovePredicate {
    /// Whether pressing `id` is legal given the presses accepted so far.
    pub fn is_legal(self, id: ButtonId, _buttons: &[Button], history: &[ButtonId]) -> bool {
        use MovePredicate::*;
        match self {
            Unconstrained => true,
            Sequential => match *history {
                [] => true,
                [first] => first.abs_diff(id) == 1,
                [.., before_last, last] => {
                    let step = i16::from(last) - i16::from(before_last);
                    i16::from(id) == i16::from(last) + step
                }
            },
            NonAdjacent => history.last().is_none_or(|&last| last.abs_diff(id) != 1),
            OddOnly => crate::is_odd(id),
            FixedSequence(required) => required.get(history.len()) == Some(&id),
        }
    }

    /// Message shown when a press breaks this predicate.
    pub const fn failure_message(self) -> &'static str {
        use MovePredicate::*;
        match self {
            Unconstrained | OddOnly | FixedSequence(_) => "Incorrect button pressed!",
            Sequential => "Buttons must be pressed in sequential order!",
            NonAdjacent => "Cannot press adjacent button!",
        }
    }
}

/// Checked after each accepted press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompletionPredicate {
    AllPressed,
    /// Every odd button pressed; even buttons do not count.
    AllOddPressed,
    /// History equals this list, same length and order.
    ExactSequence(&'static [ButtonId]),
}

impl CompletionPredicate {
    pub fn is_complete(self, buttons: &[Button], history: &[ButtonId]) -> bool {
        use CompletionPredicate::*;
        match self {
            AllPressed => buttons.iter().all(|button| button.state.was_pressed()),
            AllOddPressed => buttons
                .iter()
                .filter(|button| button.is_odd())
                .all(|button| button.state.was_pressed()),
            ExactSequence(required) => history == required,
        }
    }
}

/// A predicate together with its player-facing description.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule<P> {
    pub predicate: P,
    pub description: &'static str,
    /// Set when the description stays masked until the player fails.
    pub hidden: Option<RuleId>,
}

pub type MoveRule = Rule<MovePredicate>;
pub type CompletionRule = Rule<CompletionPredicate>;

impl<P> Rule<P> {
    pub const fn visible(predicate: P, description: &'static str) -> Self {
        Self {
            predicate,
            description,
            hidden: None,
        }
    }

    pub const fn hidden(predicate: P, description: &'static str, id: RuleId) -> Self {
        Self {
            predicate,
            description,
            hidden: Some(id),
        }
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden.is_some()
    }
}

impl MoveRule {
    pub fn is_legal(&self, id: ButtonId, buttons: &[Button], history: &[ButtonId]) -> bool {
        self.predicate.is_legal(id, buttons, history)
    }

    /// Hidden rules fail with a generic message so the failure does not spell them out.
    pub const fn failure_message(&self) -> &'static str {
        if self.is_hidden() {
            MovePredicate::Unconstrained.failure_message()
        } else {
            self.predicate.failure_message()
        }
    }
}

impl CompletionRule {
    pub fn is_complete(&self, buttons: &[Button], history: &[ButtonId]) -> bool {
        self.predicate.is_complete(buttons, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonList, ButtonState, numbered_buttons};
    use proptest::prelude::*;

    fn pressed(count: ButtonId, ids: &[ButtonId]) -> ButtonList {
        let mut buttons = numbered_buttons(count);
        for button in buttons.iter_mut() {
            if ids.contains(&button.id) {
                button.state = ButtonState::WasPressed;
            }
        }
        buttons
    }

    fn legal(predicate: MovePredicate, id: ButtonId, history: &[ButtonId]) -> bool {
        predicate.is_legal(id, &pressed(5, history), history)
    }

    #[test]
    fn unconstrained_allows_anything() {
        assert!(legal(MovePredicate::Unconstrained, 1, &[]));
        assert!(legal(MovePredicate::Unconstrained, 3, &[1]));
        assert!(legal(MovePredicate::Unconstrained, 2, &[1]));
    }

    #[test]
    fn sequential_accepts_any_first_move() {
        for id in 1..=5 {
            assert!(legal(MovePredicate::Sequential, id, &[]));
        }
    }

    #[test]
    fn sequential_second_move_sets_direction() {
        assert!(legal(MovePredicate::Sequential, 2, &[1]));
        assert!(legal(MovePredicate::Sequential, 4, &[5]));
        assert!(legal(MovePredicate::Sequential, 2, &[3]));
        assert!(legal(MovePredicate::Sequential, 4, &[3]));
        assert!(!legal(MovePredicate::Sequential, 3, &[1]));
        assert!(!legal(MovePredicate::Sequential, 3, &[5]));
    }

    #[test]
    fn sequential_continues_established_step() {
        assert!(legal(MovePredicate::Sequential, 3, &[1, 2]));
        assert!(legal(MovePredicate::Sequential, 5, &[1, 2, 3, 4]));
        assert!(legal(MovePredicate::Sequential, 3, &[5, 4]));
        assert!(legal(MovePredicate::Sequential, 1, &[5, 4, 3, 2]));
        assert!(!legal(MovePredicate::Sequential, 2, &[5, 4]));
        assert!(!legal(MovePredicate::Sequential, 5, &[2, 3]));
    }

    #[test]
    fn non_adjacent_rejects_neighbours_of_last_press() {
        assert!(legal(MovePredicate::NonAdjacent, 1, &[]));
        assert!(legal(MovePredicate::NonAdjacent, 3, &[1]));
        assert!(!legal(MovePredicate::NonAdjacent, 2, &[1]));
        assert!(!legal(MovePredicate::NonAdjacent, 4, &[5]));
        assert!(legal(MovePredicate::NonAdjacent, 2, &[5, 3, 1, 4]));
    }

    #[test]
    fn odd_only_ignores_history() {
        assert!(legal(MovePredicate::OddOnly, 1, &[]));
        assert!(legal(MovePredicate::OddOnly, 9, &[1, 3]));
        assert!(!legal(MovePredicate::OddOnly, 2, &[]));
        assert!(!legal(MovePredicate::OddOnly, 8, &[7]));
    }

    #[test]
    fn fixed_sequence_follows_list_and_stops_when_exhausted() {
        let predicate = MovePredicate::FixedSequence(&[1, 3, 5]);

        assert!(legal(predicate, 1, &[]));
        assert!(!legal(predicate, 3, &[]));
        assert!(legal(predicate, 3, &[1]));
        assert!(legal(predicate, 5, &[1, 3]));
        assert!(!legal(predicate, 2, &[1, 3, 5]));
        assert!(!legal(predicate, 1, &[1, 3, 5]));
    }

    #[test]
    fn all_pressed_requires_every_button() {
        let predicate = CompletionPredicate::AllPressed;

        assert!(predicate.is_complete(&pressed(5, &[1, 2, 3, 4, 5]), &[]));
        assert!(!predicate.is_complete(&pressed(5, &[1, 2, 3]), &[]));
        assert!(predicate.is_complete(&pressed(1, &[1]), &[1]));
    }

    #[test]
    fn all_odd_pressed_ignores_even_buttons() {
        let predicate = CompletionPredicate::AllOddPressed;

        assert!(predicate.is_complete(&pressed(9, &[1, 3, 5, 7, 9]), &[1, 3, 5, 7, 9]));
        assert!(!predicate.is_complete(&pressed(9, &[1, 3, 5, 7]), &[1, 3, 5, 7]));
    }

    #[test]
    fn exact_sequence_matches_length_and_order() {
        let predicate = CompletionPredicate::ExactSequence(&[1, 3, 5]);
        let buttons = pressed(5, &[1, 3, 5]);

        assert!(predicate.is_complete(&buttons, &[1, 3, 5]));
        assert!(!predicate.is_complete(&buttons, &[5, 3, 1]));
        assert!(!predicate.is_complete(&buttons, &[1, 3]));
    }

    #[test]
    fn hidden_rules_use_generic_failure_message() {
        let visible = MoveRule::visible(MovePredicate::NonAdjacent, "No neighbours.");
        let hidden = MoveRule::hidden(
            MovePredicate::NonAdjacent,
            "No neighbours.",
            RuleId::new("no-neighbours"),
        );

        assert_eq!(visible.failure_message(), "Cannot press adjacent button!");
        assert_eq!(hidden.failure_message(), "Incorrect button pressed!");
    }

    proptest! {
        #[test]
        fn sequential_after_two_moves_only_accepts_next_step(
            start in 1u8..=9,
            ascending in any::<bool>(),
            len in 2usize..=5,
            id in 1u8..=9,
        ) {
            let step: i16 = if ascending { 1 } else { -1 };
            let history: alloc::vec::Vec<ButtonId> = (0..len)
                .map(|i| i16::from(start) + step * i as i16)
                .filter_map(|id| ButtonId::try_from(id).ok())
                .collect();
            prop_assume!(history.len() == len);

            let last = i16::from(*history.last().unwrap());
            let buttons = pressed(9, &history);
            let expected = i16::from(id) == last + step;
            prop_assert_eq!(MovePredicate::Sequential.is_legal(id, &buttons, &history), expected);
        }

        #[test]
        fn non_adjacent_matches_distance_from_last(
            history in proptest::collection::vec(1u8..=9, 0..5),
            id in 1u8..=9,
        ) {
            let buttons = pressed(9, &history);
            let expected = history.last().is_none_or(|&last| last.abs_diff(id) != 1);
            prop_assert_eq!(MovePredicate::NonAdjacent.is_legal(id, &buttons, &history), expected);
        }

        #[test]
        fn all_pressed_iff_every_state_was_pressed(ids in proptest::collection::btree_set(1u8..=5, 0..=5)) {
            let ids: alloc::vec::Vec<ButtonId> = ids.into_iter().collect();
            let buttons = pressed(5, &ids);
            prop_assert_eq!(
                CompletionPredicate::AllPressed.is_complete(&buttons, &ids),
                ids.len() == 5
            );
        }
    }
}
