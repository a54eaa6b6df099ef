//! The shell's dispatch table.

use spanview_app_state::{MatchMode, RouteConfigError, RouteTable};

use crate::views::{self, AppView};

/// Path prefix the shell answers under when deployed behind a shared origin.
/// The bare origin works too; both spellings of the prefix root redirect to
/// search like `/` does.
pub const BASE_PREFIX: &str = "/spanview";

pub fn prefix_url(path: &str) -> String {
    format!("{BASE_PREFIX}{path}")
}

/// Builds the shell's route table. Entry order is load-bearing: the diff
/// entry must precede the single-trace entry, and the redirects must precede
/// nothing but the terminal fallback.
pub fn shell_route_table() -> Result<RouteTable<AppView>, RouteConfigError> {
    RouteTable::new(AppView::NotFound)
        .render(views::search::ROUTE_PATTERN, MatchMode::Prefix, AppView::Search)?
        .render(
            views::trace_diff::ROUTE_PATTERN,
            MatchMode::Prefix,
            AppView::TraceDiff,
        )?
        .render(views::trace::ROUTE_PATTERN, MatchMode::Prefix, AppView::Trace)?
        .render(
            views::dependency_graph::ROUTE_PATTERN,
            MatchMode::Prefix,
            AppView::DependencyGraph,
        )?
        .render(
            views::deep_dependencies::ROUTE_PATTERN,
            MatchMode::Prefix,
            AppView::DeepDependencies,
        )?
        .render(
            views::quality_metrics::ROUTE_PATTERN,
            MatchMode::Prefix,
            AppView::QualityMetrics,
        )?
        .render(views::monitor::ROUTE_PATTERN, MatchMode::Prefix, AppView::Monitor)?
        .redirect("/", MatchMode::Exact, views::search::ROUTE_PATTERN)?
        .redirect(&prefix_url(""), MatchMode::Exact, views::search::ROUTE_PATTERN)?
        .redirect(&prefix_url("/"), MatchMode::Exact, views::search::ROUTE_PATTERN)
}

/// True when `path` belongs to this shell rather than an external document.
/// The document-level click interceptor only captures anchors for which this
/// holds.
pub fn is_internal_shell_path(path: &str) -> bool {
    path == "/"
        || path == "/search"
        || path.starts_with("/search/")
        || path == "/trace"
        || path.starts_with("/trace/")
        || path == "/dependencies"
        || path.starts_with("/dependencies/")
        || path == "/deep-dependencies"
        || path.starts_with("/deep-dependencies/")
        || path == "/quality-metrics"
        || path.starts_with("/quality-metrics/")
        || path == "/monitor"
        || path.starts_with("/monitor/")
        || path == "/spanview"
        || path.starts_with("/spanview/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanview_app_state::{MemoryNavigation, NavigationContext, Resolution};

    fn table() -> RouteTable<AppView> {
        shell_route_table().expect("valid shell route table")
    }

    #[test]
    fn search_location_renders_search_without_redirect() {
        let table = table();
        let resolved = table.resolve("/search?service=foo");
        assert_eq!(resolved, Resolution::Render(&AppView::Search));
    }

    #[test]
    fn root_redirects_to_search_then_renders_it() {
        let table = table();
        let mut nav = MemoryNavigation::new("/");
        assert_eq!(*table.dispatch(&mut nav), AppView::Search);
        assert_eq!(nav.location(), "/search");
        // Replace-style redirect: the pre-redirect location left no entry.
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn both_base_prefix_spellings_redirect_to_search() {
        let table = table();
        for location in [prefix_url(""), prefix_url("/")] {
            let mut nav = MemoryNavigation::new(location);
            assert_eq!(*table.dispatch(&mut nav), AppView::Search);
            assert_eq!(nav.location(), "/search");
        }
    }

    #[test]
    fn base_prefix_redirect_is_exact_only() {
        let table = table();
        let resolved = table.resolve(&prefix_url("/unknown"));
        assert_eq!(resolved, Resolution::Render(&AppView::NotFound));
    }

    #[test]
    fn single_trace_is_unambiguous_against_diff_and_dependencies() {
        let table = table();
        assert_eq!(
            table.resolve("/trace/abc123"),
            Resolution::Render(&AppView::Trace)
        );
        assert_eq!(
            table.resolve("/trace/abc...def"),
            Resolution::Render(&AppView::TraceDiff)
        );
        assert_eq!(
            table.resolve("/dependencies"),
            Resolution::Render(&AppView::DependencyGraph)
        );
    }

    #[test]
    fn every_registered_view_path_dispatches_to_its_view() {
        let table = table();
        let cases = [
            ("/search", AppView::Search),
            ("/dependencies", AppView::DependencyGraph),
            ("/deep-dependencies", AppView::DeepDependencies),
            ("/quality-metrics", AppView::QualityMetrics),
            ("/monitor", AppView::Monitor),
        ];
        for (location, expected) in cases {
            assert_eq!(
                table.resolve(location),
                Resolution::Render(&expected),
                "location {location}"
            );
        }
    }

    #[test]
    fn unknown_locations_render_not_found() {
        let table = table();
        let resolved = table.resolve("/nonexistent/page");
        assert_eq!(resolved, Resolution::Render(&AppView::NotFound));
    }

    #[test]
    fn internal_path_check_covers_views_and_prefix() {
        assert!(is_internal_shell_path("/"));
        assert!(is_internal_shell_path("/search"));
        assert!(is_internal_shell_path("/trace/abc123"));
        assert!(is_internal_shell_path("/spanview/"));
        assert!(!is_internal_shell_path("/docs"));
        assert!(!is_internal_shell_path("/searchling"));
    }
}
