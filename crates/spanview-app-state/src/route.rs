//! Location-to-view dispatch.
//!
//! A [`RouteTable`] is an ordered list of route entries evaluated first-match
//! wins, terminated by a fallback view so every location resolves to
//! something. Patterns are parsed at table construction; a malformed pattern
//! is a [`RouteConfigError`] there, never a dispatch-time failure.

use thiserror::Error;

use crate::nav::NavigationContext;

/// Upper bound on redirect hops followed in one dispatch cycle. A table whose
/// redirects form a cycle degrades to the fallback view instead of spinning
/// the UI event loop.
pub const MAX_REDIRECT_HOPS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Matches the pattern itself and any segment-aligned location beneath it.
    Prefix,
    /// Matches only the literal location.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction<V> {
    Render(V),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteConfigError {
    #[error("route pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("route pattern contains an empty segment: {0:?}")]
    EmptySegment(String),
    #[error("route pattern contains a wildcard with no name: {0:?}")]
    UnnamedWildcard(String),
    #[error("route pattern contains adjacent wildcards with no separator: {0:?}")]
    AdjacentWildcards(String),
    #[error("redirect target must start with '/': {0:?}")]
    InvalidRedirectTarget(String),
}

/// One piece of a segment pattern. Wildcards capture one non-empty run of
/// characters; adjacent wildcards are rejected at parse time because the
/// split between them would be ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmentPart {
    Literal(String),
    Wildcard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmentPattern {
    Literal(String),
    /// A segment mixing literal runs and `:name` wildcards, e.g. `:a...:b`.
    Parts(Vec<SegmentPart>),
}

impl SegmentPattern {
    fn parse(raw: &str, pattern: &str) -> Result<Self, RouteConfigError> {
        if !raw.contains(':') {
            return Ok(Self::Literal(raw.to_string()));
        }

        let mut parts: Vec<SegmentPart> = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != ':' {
                literal.push(ch);
                continue;
            }
            if !literal.is_empty() {
                parts.push(SegmentPart::Literal(std::mem::take(&mut literal)));
            }
            let mut name = String::new();
            while let Some(next) = chars.peek() {
                if next.is_ascii_alphanumeric() || *next == '_' {
                    name.push(*next);
                    chars.next();
                } else {
                    break;
                }
            }
            if name.is_empty() {
                return Err(RouteConfigError::UnnamedWildcard(pattern.to_string()));
            }
            if matches!(parts.last(), Some(SegmentPart::Wildcard(_))) {
                return Err(RouteConfigError::AdjacentWildcards(pattern.to_string()));
            }
            parts.push(SegmentPart::Wildcard(name));
        }
        if !literal.is_empty() {
            parts.push(SegmentPart::Literal(literal));
        }
        Ok(Self::Parts(parts))
    }

    fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Literal(expected) => expected == segment,
            Self::Parts(parts) => match_segment_parts(parts, segment),
        }
    }
}

/// Matches a mixed literal/wildcard segment pattern against one location
/// segment. Wildcards consume at least one character, up to the first
/// occurrence of the following literal; there is no backtracking.
fn match_segment_parts(parts: &[SegmentPart], segment: &str) -> bool {
    let mut rest = segment;
    let mut index = 0;
    while index < parts.len() {
        match &parts[index] {
            SegmentPart::Literal(literal) => {
                let Some(remaining) = rest.strip_prefix(literal.as_str()) else {
                    return false;
                };
                rest = remaining;
                index += 1;
            }
            SegmentPart::Wildcard(_) => {
                let Some(SegmentPart::Literal(separator)) = parts.get(index + 1) else {
                    // Trailing wildcard: consumes the remainder of the segment.
                    return !rest.is_empty();
                };
                let Some((at, _)) = rest
                    .match_indices(separator.as_str())
                    .find(|(at, _)| *at > 0)
                else {
                    return false;
                };
                rest = &rest[at + separator.len()..];
                index += 2;
            }
        }
    }
    rest.is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<SegmentPattern>,
}

impl RoutePattern {
    /// Parses a pattern string. Patterns are author-supplied configuration,
    /// so unlike locations they are validated strictly: a leading `/` is
    /// required and interior empty segments are rejected. A single trailing
    /// slash is tolerated (`/spanview/` and `/spanview` parse alike).
    pub fn parse(raw: &str) -> Result<Self, RouteConfigError> {
        let Some(body) = raw.strip_prefix('/') else {
            return Err(RouteConfigError::MissingLeadingSlash(raw.to_string()));
        };
        let pieces: Vec<&str> = body.split('/').collect();
        let mut segments = Vec::new();
        for (index, piece) in pieces.iter().enumerate() {
            if piece.is_empty() {
                if index + 1 == pieces.len() {
                    break;
                }
                return Err(RouteConfigError::EmptySegment(raw.to_string()));
            }
            segments.push(SegmentPattern::parse(piece, raw)?);
        }
        Ok(Self { segments })
    }

    fn matches(&self, location_segments: &[&str], mode: MatchMode) -> bool {
        match mode {
            MatchMode::Exact if self.segments.len() != location_segments.len() => return false,
            MatchMode::Prefix if self.segments.len() > location_segments.len() => return false,
            _ => {}
        }
        self.segments
            .iter()
            .zip(location_segments)
            .all(|(pattern, segment)| pattern.matches(segment))
    }
}

/// Splits a location into path segments for matching. The query and fragment
/// are not routable state and are stripped first. Locations come from the
/// host browsing context, so empty segments are skipped leniently rather
/// than rejected.
fn location_segments(location: &str) -> Vec<&str> {
    let path = location
        .split('?')
        .next()
        .unwrap_or_default()
        .split('#')
        .next()
        .unwrap_or_default();
    path.split('/').filter(|piece| !piece.is_empty()).collect()
}

#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    pattern: RoutePattern,
    mode: MatchMode,
    action: RouteAction<V>,
}

/// The outcome of resolving one location against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a, V> {
    Render(&'a V),
    Redirect(&'a str),
}

/// An ordered, first-match-wins dispatch table. The fallback view supplied at
/// construction acts as the terminal match-anything entry, so resolution is
/// total over all locations.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    fallback: V,
}

impl<V> RouteTable<V> {
    pub fn new(fallback: V) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Appends an entry that renders `view` when `pattern` matches.
    pub fn render(
        mut self,
        pattern: &str,
        mode: MatchMode,
        view: V,
    ) -> Result<Self, RouteConfigError> {
        let pattern = RoutePattern::parse(pattern)?;
        self.entries.push(RouteEntry {
            pattern,
            mode,
            action: RouteAction::Render(view),
        });
        Ok(self)
    }

    /// Appends an entry that redirects to `target` when `pattern` matches.
    /// The target is an in-shell location, not a pattern, and must be an
    /// absolute path.
    pub fn redirect(
        mut self,
        pattern: &str,
        mode: MatchMode,
        target: &str,
    ) -> Result<Self, RouteConfigError> {
        if !target.starts_with('/') {
            return Err(RouteConfigError::InvalidRedirectTarget(target.to_string()));
        }
        let pattern = RoutePattern::parse(pattern)?;
        self.entries.push(RouteEntry {
            pattern,
            mode,
            action: RouteAction::Redirect(target.to_string()),
        });
        Ok(self)
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }

    /// Resolves one location to the first matching entry's action. Pure: the
    /// same `(location, table)` pair always yields the same resolution.
    pub fn resolve(&self, location: &str) -> Resolution<'_, V> {
        let segments = location_segments(location);
        for entry in &self.entries {
            if entry.pattern.matches(&segments, entry.mode) {
                return match &entry.action {
                    RouteAction::Render(view) => Resolution::Render(view),
                    RouteAction::Redirect(target) => Resolution::Redirect(target),
                };
            }
        }
        Resolution::Render(&self.fallback)
    }

    /// Resolves the navigation context's current location, applying redirects
    /// by replacing the location (no back-navigable entry) and re-resolving
    /// until a view is reached. Exactly one view results per call.
    pub fn dispatch<'t>(&'t self, nav: &mut dyn NavigationContext) -> &'t V {
        let mut location = nav.location();
        for _ in 0..MAX_REDIRECT_HOPS {
            match self.resolve(&location) {
                Resolution::Render(view) => return view,
                Resolution::Redirect(target) => {
                    nav.replace(target);
                    location = nav.location();
                }
            }
        }
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::MemoryNavigation;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Search,
        Trace,
        TraceDiff,
        Dependencies,
        NotFound,
    }

    fn build_table() -> Result<RouteTable<View>, RouteConfigError> {
        RouteTable::new(View::NotFound)
            .render("/search", MatchMode::Prefix, View::Search)?
            .render("/trace/:a...:b", MatchMode::Prefix, View::TraceDiff)?
            .render("/trace/:id", MatchMode::Prefix, View::Trace)?
            .render("/dependencies", MatchMode::Prefix, View::Dependencies)?
            .redirect("/", MatchMode::Exact, "/search")
    }

    fn table() -> RouteTable<View> {
        build_table().expect("valid route table")
    }

    #[test]
    fn rejects_pattern_without_leading_slash() {
        let error = RoutePattern::parse("search").expect_err("expected parse error");
        assert_eq!(
            error,
            RouteConfigError::MissingLeadingSlash("search".to_string())
        );
    }

    #[test]
    fn rejects_interior_empty_segment() {
        let error = RoutePattern::parse("/trace//span").expect_err("expected parse error");
        assert_eq!(
            error,
            RouteConfigError::EmptySegment("/trace//span".to_string())
        );
    }

    #[test]
    fn rejects_unnamed_wildcard() {
        let error = RoutePattern::parse("/trace/:").expect_err("expected parse error");
        assert_eq!(
            error,
            RouteConfigError::UnnamedWildcard("/trace/:".to_string())
        );
    }

    #[test]
    fn rejects_adjacent_wildcards() {
        let error = RoutePattern::parse("/trace/:a:b").expect_err("expected parse error");
        assert_eq!(
            error,
            RouteConfigError::AdjacentWildcards("/trace/:a:b".to_string())
        );
    }

    #[test]
    fn rejects_relative_redirect_target() {
        let error = RouteTable::new(View::NotFound)
            .redirect("/", MatchMode::Exact, "search")
            .expect_err("expected config error");
        assert_eq!(
            error,
            RouteConfigError::InvalidRedirectTarget("search".to_string())
        );
    }

    #[test]
    fn tolerates_trailing_slash_in_pattern() {
        let with = RoutePattern::parse("/spanview/").expect("valid pattern");
        let without = RoutePattern::parse("/spanview").expect("valid pattern");
        assert_eq!(with, without);
    }

    #[test]
    fn prefix_match_is_segment_aligned() {
        let table = table();
        assert_eq!(
            table.resolve("/searchling"),
            Resolution::Render(&View::NotFound)
        );
        assert_eq!(
            table.resolve("/search/advanced"),
            Resolution::Render(&View::Search)
        );
    }

    #[test]
    fn query_and_fragment_are_not_routable() {
        let table = table();
        let resolved = table.resolve("/search?service=foo#results");
        assert_eq!(resolved, Resolution::Render(&View::Search));
    }

    #[test]
    fn wildcard_segment_matches_single_trace() {
        let table = table();
        let resolved = table.resolve("/trace/abc123");
        assert_eq!(resolved, Resolution::Render(&View::Trace));
    }

    #[test]
    fn diff_pattern_requires_literal_separator() {
        let table = table();
        assert_eq!(
            table.resolve("/trace/abc123...def456"),
            Resolution::Render(&View::TraceDiff)
        );
        // Without the separator the diff entry must not shadow the trace one.
        assert_eq!(
            table.resolve("/trace/abc123def456"),
            Resolution::Render(&View::Trace)
        );
    }

    #[test]
    fn diff_wildcards_must_be_non_empty() {
        let table = table();
        let resolved = table.resolve("/trace/...def");
        assert_eq!(resolved, Resolution::Render(&View::Trace));
    }

    #[test]
    fn first_matching_entry_wins_over_later_matches() {
        // "/trace/x...y" is matched by both the diff and the plain trace
        // entry; declared order decides.
        let table = table();
        let resolved = table.resolve("/trace/x...y");
        assert_eq!(resolved, Resolution::Render(&View::TraceDiff));

        let reordered = RouteTable::new(View::NotFound)
            .render("/trace/:id", MatchMode::Prefix, View::Trace)
            .and_then(|table| table.render("/trace/:a...:b", MatchMode::Prefix, View::TraceDiff))
            .expect("valid route table");
        assert_eq!(
            reordered.resolve("/trace/x...y"),
            Resolution::Render(&View::Trace)
        );
    }

    #[test]
    fn unmatched_locations_fall_back_to_terminal_view() {
        let table = table();
        let resolved = table.resolve("/nonexistent/page");
        assert_eq!(resolved, Resolution::Render(&View::NotFound));
        assert_eq!(table.resolve(""), Resolution::Redirect("/search"));
    }

    #[test]
    fn exact_root_entry_does_not_match_deeper_locations() {
        assert_eq!(table().resolve("/"), Resolution::Redirect("/search"));
        assert_eq!(
            table().resolve("/deeper"),
            Resolution::Render(&View::NotFound)
        );
    }

    #[test]
    fn dispatch_follows_redirect_without_history_entry() {
        let table = table();
        let mut nav = MemoryNavigation::new("/");
        let view = table.dispatch(&mut nav);
        assert_eq!(*view, View::Search);
        assert_eq!(nav.location(), "/search");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn dispatch_renders_direct_matches_without_navigation() {
        let table = table();
        let mut nav = MemoryNavigation::new("/search?service=foo");
        let view = table.dispatch(&mut nav);
        assert_eq!(*view, View::Search);
        assert_eq!(nav.location(), "/search?service=foo");
    }

    #[test]
    fn redirect_cycle_degrades_to_fallback_view() {
        let cyclic = RouteTable::new(View::NotFound)
            .redirect("/a", MatchMode::Exact, "/b")
            .and_then(|table| table.redirect("/b", MatchMode::Exact, "/a"))
            .expect("valid route table");
        let mut nav = MemoryNavigation::new("/a");
        let view = cyclic.dispatch(&mut nav);
        assert_eq!(*view, View::NotFound);
    }

    #[test]
    fn resolution_is_pure_across_repeated_calls() {
        let table = table();
        for _ in 0..3 {
            assert_eq!(table.resolve("/trace/abc"), Resolution::Render(&View::Trace));
        }
    }
}
