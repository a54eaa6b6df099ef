//! Host navigation context.
//!
//! The dispatcher only needs three capabilities from the host browsing
//! context: read the current location, navigate with a history entry, and
//! navigate without one. The browser-backed implementation lives in the web
//! shell; [`MemoryNavigation`] backs tests and embedded hosts.

pub trait NavigationContext {
    /// Current location (path plus optional query) within the shell.
    fn location(&self) -> String;

    /// Navigates to `path`, adding a back-navigable history entry.
    fn push(&mut self, path: &str);

    /// Navigates to `path` without adding a history entry. Redirects use
    /// this so the pre-redirect location is not reachable via Back.
    fn replace(&mut self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNavigation {
    entries: Vec<String>,
}

impl MemoryNavigation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    /// Number of history entries held, including the current one.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MemoryNavigation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationContext for MemoryNavigation {
    fn location(&self) -> String {
        self.entries
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }

    fn replace(&mut self, path: &str) {
        match self.entries.last_mut() {
            Some(current) => *current = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_grows_history() {
        let mut nav = MemoryNavigation::default();
        nav.push("/search");
        nav.push("/trace/abc");
        assert_eq!(nav.location(), "/trace/abc");
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn replace_swaps_current_entry_in_place() {
        let mut nav = MemoryNavigation::new("/");
        nav.replace("/search");
        assert_eq!(nav.location(), "/search");
        assert_eq!(nav.depth(), 1);
    }
}
