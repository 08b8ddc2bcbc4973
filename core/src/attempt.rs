use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptState {
    Active,
    Complete,
    Failed,
}

impl AttemptState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

impl Default for AttemptState {
    fn default() -> Self {
        Self::Active
    }
}

/// One try at a level: its buttons, accepted presses, and whether input is still open.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelAttempt {
    level: LevelDefinition,
    buttons: ButtonList,
    history: MoveHistory,
    state: AttemptState,
    failed_button: Option<ButtonId>,
}

impl LevelAttempt {
    pub fn new(level: LevelDefinition) -> Self {
        Self {
            level,
            buttons: level.layout(),
            history: MoveHistory::new(),
            state: Default::default(),
            failed_button: None,
        }
    }

    pub fn level(&self) -> &LevelDefinition {
        &self.level
    }

    pub fn level_id(&self) -> LevelId {
        self.level.id
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_clickable(&self) -> bool {
        !self.is_finished()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn history(&self) -> &[ButtonId] {
        &self.history
    }

    pub fn failed_button(&self) -> Option<ButtonId> {
        self.failed_button
    }

    pub fn button_at(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.find_button(id)
    }

    pub fn press(&mut self, id: ButtonId) -> Result<PressOutcome> {
        let index = self
            .buttons
            .position_of(id)
            .ok_or(GameError::UnknownButton(self.level.id, id))?;
        self.check_active()?;

        if !self.buttons[index].state.is_pressable() {
            log::trace!("level {}: button {} is not pressable", self.level.id, id);
            return Ok(PressOutcome::Ignored);
        }

        if !self.level.move_rule.is_legal(id, &self.buttons, &self.history) {
            log::debug!(
                "level {}: press {} rejected after {:?}",
                self.level.id,
                id,
                self.history
            );
            self.buttons[index].state = ButtonState::Error;
            self.failed_button = Some(id);
            self.finish(AttemptState::Failed);
            return Ok(PressOutcome::Rejected);
        }

        self.buttons[index].state = ButtonState::WasPressed;
        self.history.push(id);

        if self
            .level
            .completion_rule
            .is_complete(&self.buttons, &self.history)
            && self.finish(AttemptState::Complete)
        {
            log::debug!("level {} complete: {:?}", self.level.id, self.history);
            Ok(PressOutcome::Completed)
        } else {
            Ok(PressOutcome::Accepted)
        }
    }

    /// Back to the initial layout with an empty history and input enabled.
    pub fn restart(&mut self) {
        *self = Self::new(self.level);
    }

    /// Returns `false` if the attempt had already finished.
    fn finish(&mut self, state: AttemptState) -> bool {
        if self.state.is_finished() {
            return false;
        }

        self.state = state;
        if matches!(state, AttemptState::Complete) {
            for button in self.buttons.iter_mut() {
                if button.state.is_pressable() {
                    button.state = ButtonState::Disabled;
                }
            }
        }
        true
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::InputLocked)
        } else {
            Ok(())
        }
    }
}
