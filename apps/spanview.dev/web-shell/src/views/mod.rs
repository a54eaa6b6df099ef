//! Page views behind the shell dispatcher.
//!
//! Each view module publishes the canonical location pattern the route table
//! binds it under. The dispatcher passes views nothing; a view reads the
//! location and anything else it needs from the shared state container.

pub mod deep_dependencies;
pub mod dependency_graph;
pub mod monitor;
pub mod not_found;
pub mod quality_metrics;
pub mod search;
pub mod trace;
pub mod trace_diff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Search,
    TraceDiff,
    Trace,
    DependencyGraph,
    DeepDependencies,
    QualityMetrics,
    Monitor,
    NotFound,
}

impl AppView {
    pub fn title(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::TraceDiff => "Compare Traces",
            Self::Trace => "Trace",
            Self::DependencyGraph => "Dependencies",
            Self::DeepDependencies => "Deep Dependencies",
            Self::QualityMetrics => "Quality Metrics",
            Self::Monitor => "Monitor",
            Self::NotFound => "Not Found",
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn render(
        self,
        document: &web_sys::Document,
        mount: &web_sys::Element,
        state: &spanview_app_state::AppState,
    ) -> Result<(), wasm_bindgen::JsValue> {
        match self {
            Self::Search => search::render(document, mount, state),
            Self::TraceDiff => trace_diff::render(document, mount, state),
            Self::Trace => trace::render(document, mount, state),
            Self::DependencyGraph => dependency_graph::render(document, mount),
            Self::DeepDependencies => deep_dependencies::render(document, mount),
            Self::QualityMetrics => quality_metrics::render(document, mount),
            Self::Monitor => monitor::render(document, mount),
            Self::NotFound => not_found::render(document, mount, state),
        }
    }
}
