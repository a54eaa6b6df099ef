//! Shell root: composes the theme, the shared state container, and the
//! dispatcher over an injected navigation context. Construction is the
//! bootstrap boundary; rendering never repeats side effects.

use std::cell::RefCell;
use std::rc::Rc;

use spanview_app_state::{
    AppAction, AppState, NavigationContext, RouteConfigError, RouteTable, apply_action,
};
use spanview_client_core::{ApiClient, ScriptProcessor};
use spanview_ui_core::Theme;

use crate::bootstrap::{BootstrapError, run_bootstrap};
use crate::routes::shell_route_table;
use crate::theme::shell_theme;
use crate::views::AppView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("bootstrap failed: {0}")]
    Bootstrap(#[from] BootstrapError),
    #[error("route table construction failed: {0}")]
    RouteConfig(#[from] RouteConfigError),
}

pub struct Shell<N: NavigationContext> {
    theme: Theme,
    table: RouteTable<AppView>,
    store: Rc<RefCell<AppState>>,
    nav: N,
}

impl<N: NavigationContext> Shell<N> {
    /// Builds the shell around the injected store and navigation context.
    /// Runs the bootstrap sequence exactly once, then constructs the route
    /// table and theme; any failure means the shell does not mount and the
    /// host decides what to show instead.
    pub fn new(
        store: Rc<RefCell<AppState>>,
        api: &mut ApiClient,
        scripts: &mut dyn ScriptProcessor,
        nav: N,
    ) -> Result<Self, ShellError> {
        run_bootstrap(api, scripts)?;
        let table = shell_route_table()?;
        let shell = Self {
            theme: shell_theme(),
            table,
            store,
            nav,
        };
        let location = shell.nav.location();
        let _ = apply_action(
            &mut shell.store.borrow_mut(),
            AppAction::BootstrapFromLocation { location },
        );
        Ok(shell)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn store(&self) -> &Rc<RefCell<AppState>> {
        &self.store
    }

    pub fn location(&self) -> String {
        self.nav.location()
    }

    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.nav
    }

    /// Dispatches the current location to exactly one view, following
    /// redirects through the navigation context, and records the settled
    /// location in the store. Safe to call on every re-render.
    pub fn active_view(&mut self) -> AppView {
        let view = *self.table.dispatch(&mut self.nav);
        let location = self.nav.location();
        let _ = apply_action(
            &mut self.store.borrow_mut(),
            AppAction::Navigate { location },
        );
        view
    }

    /// Programmatic navigation with a back-navigable history entry.
    pub fn navigate(&mut self, path: &str) -> AppView {
        self.nav.push(path);
        self.active_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanview_app_state::MemoryNavigation;
    use spanview_client_core::ScriptError;

    #[derive(Default)]
    struct RecordingScripts {
        calls: u32,
    }

    impl ScriptProcessor for RecordingScripts {
        fn process_scripts(&mut self) -> Result<(), ScriptError> {
            self.calls += 1;
            Ok(())
        }
    }

    struct FailingScripts;

    impl ScriptProcessor for FailingScripts {
        fn process_scripts(&mut self) -> Result<(), ScriptError> {
            Err(ScriptError::Discovery("config document missing".to_string()))
        }
    }

    fn new_shell(
        api: &mut ApiClient,
        scripts: &mut dyn ScriptProcessor,
        initial: &str,
    ) -> Shell<MemoryNavigation> {
        Shell::new(
            Rc::new(RefCell::new(AppState::default())),
            api,
            scripts,
            MemoryNavigation::new(initial),
        )
        .expect("shell constructs")
    }

    #[test]
    fn bootstrap_runs_once_per_construction_after_api_root() {
        let mut api = ApiClient::new();
        let mut scripts = RecordingScripts::default();

        let _first = new_shell(&mut api, &mut scripts, "/");
        assert_eq!(scripts.calls, 1);
        assert!(api.is_configured());

        let _second = new_shell(&mut api, &mut scripts, "/");
        assert_eq!(scripts.calls, 2);
    }

    #[test]
    fn re_rendering_does_not_re_run_bootstrap() {
        let mut api = ApiClient::new();
        let mut scripts = RecordingScripts::default();
        let mut shell = new_shell(&mut api, &mut scripts, "/search");

        for _ in 0..3 {
            assert_eq!(shell.active_view(), AppView::Search);
        }
        assert_eq!(scripts.calls, 1);
    }

    #[test]
    fn bootstrap_failure_fails_shell_construction() {
        let mut api = ApiClient::new();
        let result = Shell::new(
            Rc::new(RefCell::new(AppState::default())),
            &mut api,
            &mut FailingScripts,
            MemoryNavigation::default(),
        );
        assert!(matches!(result, Err(ShellError::Bootstrap(_))));
    }

    #[test]
    fn root_location_settles_on_search_and_updates_the_store() {
        let mut api = ApiClient::new();
        let mut scripts = RecordingScripts::default();
        let mut shell = new_shell(&mut api, &mut scripts, "/");

        assert_eq!(shell.active_view(), AppView::Search);
        assert_eq!(shell.location(), "/search");
        assert_eq!(shell.store().borrow().location, "/search");
        // The redirect replaced the location instead of pushing an entry.
        assert_eq!(shell.navigation_mut().depth(), 1);
    }

    #[test]
    fn store_identity_is_the_injected_one() {
        let store = Rc::new(RefCell::new(AppState::default()));
        let mut api = ApiClient::new();
        let mut scripts = RecordingScripts::default();
        let shell = Shell::new(
            store.clone(),
            &mut api,
            &mut scripts,
            MemoryNavigation::default(),
        )
        .expect("shell constructs");
        assert!(Rc::ptr_eq(&store, shell.store()));
        assert_eq!(store.borrow().location, "/");
    }

    #[test]
    fn programmatic_navigation_pushes_history_and_dispatches() {
        let mut api = ApiClient::new();
        let mut scripts = RecordingScripts::default();
        let mut shell = new_shell(&mut api, &mut scripts, "/search");

        assert_eq!(shell.navigate("/trace/abc123"), AppView::Trace);
        assert_eq!(shell.store().borrow().location, "/trace/abc123");
        assert_eq!(shell.navigation_mut().depth(), 2);
    }
}
