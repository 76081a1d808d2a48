#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Navbar search text shared with the room list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    /// Trimmed, lower-cased query; `None` when blank.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}
