use smallvec::SmallVec;

use crate::Button;

/// Identifier of a single button, starting at 1.
pub type ButtonId = u8;

/// Identifier of a level inside a campaign.
pub type LevelId = u16;

/// Largest layout any level uses.
pub const MAX_BUTTONS: usize = 9;

/// Buttons of a level, in display order.
pub type ButtonList = SmallVec<[Button; MAX_BUTTONS]>;

/// Ids of accepted presses for the current attempt, in press order.
pub type MoveHistory = SmallVec<[ButtonId; MAX_BUTTONS]>;

pub const fn is_odd(id: ButtonId) -> bool {
    id % 2 == 1
}

pub trait ButtonLookupExt {
    fn find_button(&self, id: ButtonId) -> Option<&Button>;
    fn position_of(&self, id: ButtonId) -> Option<usize>;
}

impl ButtonLookupExt for [Button] {
    fn find_button(&self, id: ButtonId) -> Option<&Button> {
        self.iter().find(|button| button.id == id)
    }

    fn position_of(&self, id: ButtonId) -> Option<usize> {
        self.iter().position(|button| button.id == id)
    }
}
