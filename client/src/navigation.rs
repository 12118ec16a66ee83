//! Navigation seam used by the session when it has to leave the current page.

use std::sync::{Mutex, PoisonError};

/// Where the front-end currently is, and how to send it elsewhere.
///
/// `redirect` is a full navigation: the front-end discards its in-memory
/// state and reloads at `path`.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

#[derive(Debug, Default)]
struct MemoryNavigatorState {
    path: String,
    redirects: Vec<String>,
}

/// Navigator that only records where it was sent. Used by the terminal
/// front-end and by tests.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    state: Mutex<MemoryNavigatorState>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn at(path: &str) -> Self {
        Self { state: Mutex::new(MemoryNavigatorState { path: path.to_owned(), redirects: Vec::new() }) }
    }

    /// Every redirect issued so far, oldest first.
    #[must_use]
    pub fn redirects(&self) -> Vec<String> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).redirects.clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).path.clone()
    }

    fn redirect(&self, path: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.path = path.to_owned();
        state.redirects.push(path.to_owned());
    }
}
