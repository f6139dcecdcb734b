//! Lock/unlock decisions per category.
//!
//! The gate is re-evaluated from the current selection every time it is
//! needed; it holds no state of its own.

use crate::model::{CategoryId, SelectionState};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Snapshot of the lock decision for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    chassis_selected: bool,
    model_selected: bool,
}

impl Gate {
    #[must_use]
    pub fn state(&self, category: CategoryId) -> LockState {
        let unlocked = match category {
            CategoryId::Chassis => true,
            CategoryId::Model => self.chassis_selected,
            _ => self.model_selected,
        };
        if unlocked {
            LockState::Unlocked
        } else {
            LockState::Locked
        }
    }

    #[must_use]
    pub fn is_unlocked(&self, category: CategoryId) -> bool {
        self.state(category) == LockState::Unlocked
    }

    /// Categories currently open for editing, in display order.
    #[must_use]
    pub fn unlocked(&self) -> Vec<CategoryId> {
        CategoryId::ALL
            .into_iter()
            .filter(|c| self.is_unlocked(*c))
            .collect()
    }
}

/// Chassis is always open, model needs a chassis, everything else needs a model.
#[must_use]
pub fn evaluate(state: &SelectionState) -> Gate {
    Gate {
        chassis_selected: state.chassis_id.is_some(),
        model_selected: state.model_id.is_some(),
    }
}
