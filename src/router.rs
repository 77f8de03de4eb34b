//! URL <-> view mapping.
//!
//! `/` is home; `/case-study/<slug>` selects a case study from the fixed slug
//! set. Anything else falls back to home and rewrites the URL. History
//! push/pop glue is browser-only; the parse/format core is plain data.

pub const CASE_STUDY_SLUGS: [&str; 5] = [
    "hiver-analytics",
    "agent-client-connections",
    "hiver-experience-redesign",
    "ibc-franchise",
    "ibc-design-system",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    CaseStudy(&'static str),
}

impl Route {
    /// Resolve a location path. Unknown paths resolve to `Home`; the caller is
    /// expected to rewrite the URL when the parsed route does not match the
    /// requested path.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        if let Some(slug) = trimmed.strip_prefix("/case-study/") {
            if let Some(known) = CASE_STUDY_SLUGS.iter().find(|s| **s == slug) {
                return Route::CaseStudy(known);
            }
        }
        Route::Home
    }

    pub fn path(self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::CaseStudy(slug) => format!("/case-study/{slug}"),
        }
    }

    /// Whether `path` already names this route exactly.
    pub fn matches_path(self, path: &str) -> bool {
        Route::parse(path) == self && (self != Route::Home || path == "/")
    }
}

/// Current location path as the browser reports it. Native shells have no
/// location bar; they start at home.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

/// Push `route` onto the session history so back/forward traverse views.
pub fn push_route(route: Route) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&route.path()),
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = route;
    }
}

/// Replace the current history entry, used when a bad path falls back to home.
pub fn replace_route(route: Route) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&route.path()),
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_parses_to_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn every_known_slug_parses() {
        for slug in CASE_STUDY_SLUGS {
            let path = format!("/case-study/{slug}");
            assert_eq!(Route::parse(&path), Route::CaseStudy(slug));
        }
    }

    #[test]
    fn paths_round_trip() {
        for slug in CASE_STUDY_SLUGS {
            let route = Route::CaseStudy(slug);
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::parse(&Route::Home.path()), Route::Home);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/case-study/unknown-slug"), Route::Home);
        assert_eq!(Route::parse("/blog"), Route::Home);
        assert_eq!(Route::parse("/case-study/"), Route::Home);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(
            Route::parse("/case-study/hiver-analytics/"),
            Route::CaseStudy("hiver-analytics")
        );
    }

    #[test]
    fn fallback_paths_do_not_match_home_exactly() {
        // A bad path resolves to home but is not home's canonical path, which
        // is the signal to rewrite the URL.
        assert!(!Route::Home.matches_path("/case-study/unknown-slug"));
        assert!(Route::Home.matches_path("/"));
        assert!(Route::CaseStudy("ibc-franchise").matches_path("/case-study/ibc-franchise"));
    }
}
