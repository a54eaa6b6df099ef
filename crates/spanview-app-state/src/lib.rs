//! Shared application state for the SpanView shell.
//!
//! One `AppState` value exists per shell process; the shell injects a handle
//! to it into every surface that needs it. State transitions go through
//! [`apply_action`] so they stay observable and replayable.

pub mod nav;
pub mod route;

pub use nav::{MemoryNavigation, NavigationContext};
pub use route::{
    MatchMode, Resolution, RouteAction, RouteConfigError, RoutePattern, RouteTable,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The location (path plus optional query) the shell last dispatched.
    pub location: String,
    /// Counts applied navigations, so surfaces can cheaply detect staleness.
    #[serde(default)]
    pub navigation_epoch: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            location: "/".to_string(),
            navigation_epoch: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Initial hydration from the host location during boot.
    BootstrapFromLocation { location: String },
    /// A navigation applied after boot (link, popstate, or redirect).
    Navigate { location: String },
}

/// Applies one action to the state, returning whether anything changed.
pub fn apply_action(state: &mut AppState, action: AppAction) -> bool {
    match action {
        AppAction::BootstrapFromLocation { location } => {
            if state.location == location {
                return false;
            }
            state.location = location;
            true
        }
        AppAction::Navigate { location } => {
            if state.location == location {
                return false;
            }
            state.location = location;
            state.navigation_epoch = state.navigation_epoch.saturating_add(1);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_sets_location_without_counting_a_navigation() {
        let mut state = AppState::default();
        let changed = apply_action(
            &mut state,
            AppAction::BootstrapFromLocation {
                location: "/search?service=foo".to_string(),
            },
        );
        assert!(changed);
        assert_eq!(state.location, "/search?service=foo");
        assert_eq!(state.navigation_epoch, 0);
    }

    #[test]
    fn navigate_bumps_epoch_only_on_change() {
        let mut state = AppState::default();
        assert!(apply_action(
            &mut state,
            AppAction::Navigate {
                location: "/trace/abc".to_string(),
            },
        ));
        assert_eq!(state.navigation_epoch, 1);

        let changed = apply_action(
            &mut state,
            AppAction::Navigate {
                location: "/trace/abc".to_string(),
            },
        );
        assert!(!changed);
        assert_eq!(state.navigation_epoch, 1);
    }
}
