#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use serde::{Deserialize, Serialize};

pub use attempt::*;
pub use button::*;
pub use controller::*;
pub use error::*;
pub use hidden::*;
pub use level::*;
pub use progress::*;
pub use rules::*;
pub use types::*;

mod attempt;
mod button;
mod controller;
mod error;
mod hidden;
mod level;
mod progress;
mod rules;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PressOutcome {
    /// Button was not pressable, nothing changed.
    Ignored,
    Accepted,
    Completed,
    Rejected,
}

impl PressOutcome {
    pub const fn has_update(self) -> bool {
        use PressOutcome::*;
        match self {
            Ignored => false,
            Accepted => true,
            Completed => true,
            Rejected => true,
        }
    }
}
