use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Menu,
    Playing,
    LevelComplete,
    LevelFailed,
}

impl GamePhase {
    pub const fn is_in_level(self) -> bool {
        !matches!(self, Self::Menu)
    }
}

/// Status line shown under the buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Message {
    LevelComplete(LevelId),
    Failed(&'static str),
}

impl Message {
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelComplete(level) => write!(f, "Level {level} Complete!"),
            Self::Failed(reason) => write!(f, "Error: {reason} Press restart to try again."),
        }
    }
}

/// Drives a play session: which level is up, its attempt, and campaign progress.
#[derive(Debug)]
pub struct GameController<S> {
    registry: LevelRegistry,
    store: S,
    unlocked: UnlockedLevels,
    attempt: Option<LevelAttempt>,
    message: Option<Message>,
}

impl<S: ProgressStore> GameController<S> {
    /// Loads saved progress; anything missing or unreadable starts from the first level.
    pub fn new(registry: LevelRegistry, store: S) -> Self {
        let first = registry.first_level();
        let (unlocked, repair) = match store.load() {
            Ok(Some(mut unlocked)) => {
                let repair = unlocked.unlock(first);
                (unlocked, repair)
            }
            Ok(None) => (UnlockedLevels::with_first(first), false),
            Err(err) => {
                log::warn!("could not load progress, starting fresh: {}", err);
                (UnlockedLevels::with_first(first), false)
            }
        };
        log::debug!("unlocked levels: {:?}", unlocked.to_vec());

        let mut controller = Self {
            registry,
            store,
            unlocked,
            attempt: None,
            message: None,
        };
        if repair {
            controller.save_progress();
        }
        controller
    }

    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn unlocked(&self) -> &UnlockedLevels {
        &self.unlocked
    }

    pub fn is_unlocked(&self, level: LevelId) -> bool {
        self.unlocked.contains(level)
    }

    /// Anything beyond the first level has been unlocked.
    pub fn can_resume(&self) -> bool {
        self.unlocked
            .iter()
            .any(|level| level != self.registry.first_level())
    }

    pub fn phase(&self) -> GamePhase {
        match self.attempt.as_ref().map(LevelAttempt::state) {
            None => GamePhase::Menu,
            Some(AttemptState::Active) => GamePhase::Playing,
            Some(AttemptState::Complete) => GamePhase::LevelComplete,
            Some(AttemptState::Failed) => GamePhase::LevelFailed,
        }
    }

    pub fn attempt(&self) -> Option<&LevelAttempt> {
        self.attempt.as_ref()
    }

    pub fn current_level(&self) -> Option<LevelId> {
        self.attempt.as_ref().map(LevelAttempt::level_id)
    }

    pub fn buttons(&self) -> &[Button] {
        match &self.attempt {
            Some(attempt) => attempt.buttons(),
            None => &[],
        }
    }

    pub fn history(&self) -> &[ButtonId] {
        match &self.attempt {
            Some(attempt) => attempt.history(),
            None => &[],
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.attempt.as_ref().is_some_and(LevelAttempt::is_clickable)
    }

    pub fn message(&self) -> Option<Message> {
        self.message
    }

    pub fn start_game(&mut self) -> Result<()> {
        self.play(self.registry.first_level())
    }

    /// Continues at the furthest unlocked level this campaign knows about.
    pub fn resume(&mut self) -> Result<()> {
        let level = self
            .registry
            .levels()
            .iter()
            .rev()
            .copied()
            .find(|&level| self.unlocked.contains(level))
            .unwrap_or_else(|| self.registry.first_level());
        self.play(level)
    }

    pub fn select_level(&mut self, level: LevelId) -> Result<()> {
        self.registry.get(level)?;
        if !self.unlocked.contains(level) {
            return Err(GameError::LevelLocked(level));
        }
        self.play(level)
    }

    pub fn press(&mut self, id: ButtonId, revealed: &mut RevealedRules) -> Result<PressOutcome> {
        let attempt = self.attempt.as_mut().ok_or(GameError::InputLocked)?;
        let outcome = attempt.press(id)?;
        log::trace!("level {}: press {} -> {:?}", attempt.level_id(), id, outcome);

        match outcome {
            PressOutcome::Completed => {
                let level = attempt.level_id();
                self.message = Some(Message::LevelComplete(level));
                self.unlock_after(level);
            }
            PressOutcome::Rejected => {
                let level = *attempt.level();
                for rule in level.hidden_rules() {
                    revealed.reveal(rule);
                }
                self.message = Some(Message::Failed(level.move_rule.failure_message()));
            }
            PressOutcome::Accepted | PressOutcome::Ignored => {}
        }

        Ok(outcome)
    }

    pub fn restart(&mut self) -> Result<()> {
        let attempt = self.attempt.as_mut().ok_or(GameError::InputLocked)?;
        log::debug!("restart level {}", attempt.level_id());
        attempt.restart();
        self.message = None;
        Ok(())
    }

    /// Moves on to the next level, or back to the menu after the last one.
    pub fn advance(&mut self) -> Result<GamePhase> {
        let current = self.current_level().ok_or(GameError::InputLocked)?;
        if self.phase() != GamePhase::LevelComplete {
            return Err(GameError::NotComplete(current));
        }

        match self.registry.next_level(current) {
            Some(next) => self.play(next)?,
            None => {
                log::debug!("level {} was the last one", current);
                self.return_to_menu();
            }
        }
        Ok(self.phase())
    }

    pub fn return_to_menu(&mut self) {
        self.attempt = None;
        self.message = None;
    }

    fn play(&mut self, level: LevelId) -> Result<()> {
        let definition = *self.registry.get(level)?;
        log::debug!("start level {}", level);
        self.attempt = Some(LevelAttempt::new(definition));
        self.message = None;
        Ok(())
    }

    fn unlock_after(&mut self, level: LevelId) {
        let Some(next) = self.registry.next_level(level) else {
            return;
        };

        if self.unlocked.unlock(next) {
            log::debug!("unlocked level {}", next);
            self.save_progress();
        }
    }

    fn save_progress(&mut self) {
        if let Err(err) = self.store.save(&self.unlocked) {
            log::warn!("failed to save progress: {}", err);
        }
    }
}
