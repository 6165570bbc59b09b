//! Navigation history state.
//!
//! [`NavigatorState`] is the raw history stack underneath the guarded
//! navigator: a list of visited paths plus a cursor. Its operations apply
//! unconditionally and report what changed as a [`RouteChange`]; running
//! guards first is the job of
//! [`GuardedNavigator`](crate::navigator::GuardedNavigator).

use crate::path::normalize_path;

/// The history operation behind a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    /// A new entry was appended.
    Push,
    /// The current entry was swapped in place.
    Replace,
    /// The cursor moved to the previous entry.
    Back,
    /// The cursor moved to the next entry.
    Forward,
}

/// A single applied history change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    /// Path before the change, if any.
    pub from: Option<String>,
    /// Path after the change.
    pub to: String,
    /// Which history operation produced the change.
    pub kind: NavigationKind,
}

/// History stack with a movable cursor.
///
/// Starts at `"/"`. Paths are normalized on entry, so history never holds
/// trailing-slash variants of the same location.
#[derive(Debug, Clone)]
pub struct NavigatorState {
    /// Visited paths.
    history: Vec<String>,
    /// Current position in history.
    current: usize,
}

impl NavigatorState {
    /// Create a new state positioned at the root path.
    pub fn new() -> Self {
        Self {
            history: vec!["/".to_string()],
            current: 0,
        }
    }

    /// Get the current path.
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// Append a new path, dropping any forward history.
    pub fn push(&mut self, path: &str) -> RouteChange {
        let from = Some(self.current_path().to_string());
        let to = normalize_path(path).into_owned();

        // Remove forward history when pushing
        self.history.truncate(self.current + 1);

        self.history.push(to.clone());
        self.current += 1;

        RouteChange {
            from,
            to,
            kind: NavigationKind::Push,
        }
    }

    /// Swap the current path in place.
    pub fn replace(&mut self, path: &str) -> RouteChange {
        let from = Some(self.current_path().to_string());
        let to = normalize_path(path).into_owned();

        self.history[self.current] = to.clone();

        RouteChange {
            from,
            to,
            kind: NavigationKind::Replace,
        }
    }

    /// Move back in history.
    ///
    /// Returns `None` when already at the oldest entry.
    pub fn back(&mut self) -> Option<RouteChange> {
        if self.current > 0 {
            let from = Some(self.current_path().to_string());
            self.current -= 1;
            let to = self.current_path().to_string();

            Some(RouteChange {
                from,
                to,
                kind: NavigationKind::Back,
            })
        } else {
            None
        }
    }

    /// Move forward in history.
    ///
    /// Returns `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<RouteChange> {
        if self.current < self.history.len() - 1 {
            let from = Some(self.current_path().to_string());
            self.current += 1;
            let to = self.current_path().to_string();

            Some(RouteChange {
                from,
                to,
                kind: NavigationKind::Forward,
            })
        } else {
            None
        }
    }

    /// Check if there is history behind the cursor.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if there is history ahead of the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.current < self.history.len() - 1
    }

    /// Peek at the path `back()` would land on, without navigating.
    pub fn peek_back_path(&self) -> Option<&str> {
        if self.current > 0 {
            Some(&self.history[self.current - 1])
        } else {
            None
        }
    }

    /// Peek at the path `forward()` would land on, without navigating.
    pub fn peek_forward_path(&self) -> Option<&str> {
        if self.current < self.history.len() - 1 {
            Some(&self.history[self.current + 1])
        } else {
            None
        }
    }

    /// Number of entries in history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// A fresh state has one entry, never zero.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Reset history to a single root entry.
    pub fn clear(&mut self) {
        self.history.clear();
        self.history.push("/".to_string());
        self.current = 0;
    }
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self::new()
    }
}
