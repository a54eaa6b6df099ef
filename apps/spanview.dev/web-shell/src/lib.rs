pub mod bootstrap;
pub mod routes;
pub mod shell;
pub mod theme;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde::Serialize;
    use spanview_app_state::{AppState, NavigationContext};
    use spanview_client_core::ApiClient;
    use spanview_ui_core::Theme;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlAnchorElement, HtmlElement, MouseEvent};
    use web_time::Instant;

    use crate::shell::Shell;
    use crate::views::AppView;
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod routing;
    mod scripts;

    use dom::{apply_theme_css, render_active_view};
    use lifecycle::*;
    use routing::*;
    use scripts::DomScriptProcessor;

    thread_local! {
        // The store's identity is fixed at module load; the shell and every
        // surface share this one instance.
        static APP_STATE: Rc<RefCell<AppState>> = Rc::new(RefCell::new(AppState::default()));
        static API_CLIENT: RefCell<ApiClient> = RefCell::new(ApiClient::new());
        static SHELL: RefCell<Option<Shell<BrowserNavigation>>> = const { RefCell::new(None) };
        static DIAGNOSTICS: RefCell<BootDiagnostics> = RefCell::new(BootDiagnostics::default());
        static ROUTE_POPSTATE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static ROUTE_LINK_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[derive(Debug, Clone, Default, Serialize)]
    struct BootDiagnostics {
        phase: String,
        detail: String,
        last_error: Option<String>,
        route_path: String,
        active_view: Option<String>,
        views_rendered: u64,
        boot_started_at_unix_ms: Option<u64>,
        dom_ready_latency_ms: Option<u64>,
        budget_breaches: Vec<String>,
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_boot_phase("booting", "initializing SpanView web shell");
        if let Err(error) = boot() {
            set_boot_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn boot_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
            })
        })
    }

    #[wasm_bindgen]
    pub fn app_state_json() -> String {
        APP_STATE.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| "{}".to_string())
        })
    }

    /// Programmatic navigation for the hosting page: pushes a history entry
    /// and re-dispatches.
    #[wasm_bindgen]
    pub fn navigate(path: String) {
        apply_route_transition(&path, true);
    }

    fn boot() -> Result<(), String> {
        if should_force_boot_failure() {
            return Err(format!(
                "forced startup failure because query contains {BOOT_FAIL_QUERY_FLAG}"
            ));
        }

        let boot_started_at = Instant::now();
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.boot_started_at_unix_ms = Some(epoch_millis_now());
            state.dom_ready_latency_ms = None;
            state.budget_breaches.clear();
        });

        ensure_shell_dom()?;

        // Shell construction is the bootstrap boundary: the API root is
        // assigned and operator scripts run before anything renders.
        let shell = APP_STATE
            .with(|store| {
                API_CLIENT.with(|api| {
                    let mut api = api.borrow_mut();
                    let mut scripts = DomScriptProcessor::default();
                    Shell::new(store.clone(), &mut api, &mut scripts, BrowserNavigation)
                })
            })
            .map_err(|error| error.to_string())?;

        apply_theme_css(shell.theme())?;
        SHELL.with(|cell| {
            *cell.borrow_mut() = Some(shell);
        });

        install_browser_navigation_handlers();
        render_active_view()?;

        let dom_ready_latency_ms =
            u64::try_from(boot_started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        record_boot_milestone(
            "dom_ready_latency_ms",
            dom_ready_latency_ms,
            DOM_READY_BUDGET_MS,
        );
        set_boot_phase("ready", "shell mounted");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::boot_diagnostics_json;

#[cfg(not(target_arch = "wasm32"))]
pub fn boot_diagnostics_json() -> String {
    "{\"phase\":\"native\",\"detail\":\"web shell diagnostics only available on wasm\"}".to_string()
}
