//! The dispatch seam between thunks and whatever holds the state.
//!
//! Thunks are written against [`Dispatch`] so the same code drives the
//! Dioxus signal-backed store in the UI and the plain [`Store`] in tests.

use crate::action::Action;
use crate::state::AppState;

pub trait Dispatch {
    /// Apply an action to the held state.
    fn dispatch(&mut self, action: Action);

    /// Read a snapshot of the held state.
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
}

/// A plain, framework-free store.
#[derive(Clone, Debug, Default)]
pub struct Store {
    state: AppState,
    dispatched: Vec<Action>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            dispatched: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Every action applied so far, oldest first.
    pub fn dispatched(&self) -> &[Action] {
        &self.dispatched
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        self.dispatched.push(action.clone());
        self.state.reduce(action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors;

    #[test]
    fn test_store_records_and_applies() {
        let mut store = Store::default();
        store.dispatch(Action::SetPage(2));
        store.dispatch(Action::ClearErrors);

        assert_eq!(store.dispatched().len(), 2);
        assert_eq!(store.with_state(selectors::current_page), 2);
    }
}
