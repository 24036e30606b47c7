//! Navigation handle for the thunks.

use api::History;
use dioxus::prelude::*;

/// [`History`] that forwards paths to a navigation callback.
///
/// Platform packages own the router, so views receive navigation as an
/// `EventHandler<String>` and thunks push through this adapter.
#[derive(Clone, Copy)]
pub struct CallbackHistory(pub EventHandler<String>);

impl History for CallbackHistory {
    fn push(&self, path: &str) {
        tracing::info!(%path, "navigating");
        self.0.call(path.to_string());
    }
}
