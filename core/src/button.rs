use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::{ButtonId, ButtonList};

/// Player-visible state of a single button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    Pressable,
    WasPressed,
    Disabled,
    Error,
}

impl ButtonState {
    pub const fn is_pressable(self) -> bool {
        matches!(self, Self::Pressable)
    }

    pub const fn was_pressed(self) -> bool {
        matches!(self, Self::WasPressed)
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::Pressable
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub id: ButtonId,
    pub label: String,
    pub state: ButtonState,
}

impl Button {
    pub fn new(id: ButtonId) -> Self {
        Self {
            id,
            label: id.to_string(),
            state: Default::default(),
        }
    }

    pub const fn is_odd(&self) -> bool {
        crate::is_odd(self.id)
    }
}

/// Fresh row of `count` pressable buttons numbered from 1.
pub fn numbered_buttons(count: ButtonId) -> ButtonList {
    (1..=count).map(Button::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_buttons_are_labelled_and_pressable() {
        let buttons = numbered_buttons(5);

        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].id, 1);
        assert_eq!(buttons[4].label, "5");
        assert!(buttons.iter().all(|button| button.state.is_pressable()));
    }

    #[test]
    fn single_button_layout() {
        let buttons = numbered_buttons(1);

        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0], Button::new(1));
    }
}
