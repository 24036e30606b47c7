use std::cell::RefCell;

/// Where an expired session is sent.
pub const LOGIN_PATH: &str = "/login";

/// Navigation handle handed to thunks.
pub trait History {
    fn push(&self, path: &str);
}

/// History that only records pushed paths.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    paths: RefCell<Vec<String>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn push(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}
