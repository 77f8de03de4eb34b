use crate::router::{self, Route};
use crate::theme::{ALL_THEMES, Theme, initial_theme, persist_theme, theme_definition};
use crate::views::{AssistantWidget, CaseStudyView, HomeView};
use dioxus::prelude::*;
use std::time::Duration;

const FOLIO_CSS: Asset = asset!("/assets/folio.css");
const THEME_PERSIST_DEBOUNCE: Duration = Duration::from_millis(250);

/// The theme store, provided through context. Consumers read the signal and
/// re-render on change; writes go through `set`, which persists after a short
/// debounce so rapid switching hits storage once.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    theme: Signal<Theme>,
    debounce: Signal<u64>,
}

impl ThemeStore {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn set(&self, theme: Theme) {
        let mut theme_signal = self.theme;
        let mut debounce = self.debounce;
        theme_signal.set(theme);
        let token = debounce() + 1;
        debounce.set(token);
        spawn(async move {
            tokio::time::sleep(THEME_PERSIST_DEBOUNCE).await;
            if debounce() == token {
                persist_theme(theme);
            }
        });
    }
}

pub fn use_theme_store() -> ThemeStore {
    use_context()
}

/// Switch views and record the step in the session history.
pub fn navigate(route: Signal<Route>, to: Route) {
    let mut route = route;
    if route() != to {
        router::push_route(to);
        route.set(to);
    }
}

#[component]
pub fn App() -> Element {
    let theme = use_signal(initial_theme);
    let debounce = use_signal(|| 0u64);
    use_context_provider(|| ThemeStore { theme, debounce });

    let route = use_signal(|| {
        let path = router::current_path();
        let parsed = Route::parse(&path);
        if !parsed.matches_path(&path) {
            router::replace_route(parsed);
        }
        parsed
    });
    use_history_sync(route);

    rsx! {
        ThemeStyles {}
        SiteHeader { route }
        match route() {
            Route::Home => rsx! {
                HomeView { route }
            },
            Route::CaseStudy(slug) => rsx! {
                CaseStudyView { slug, route }
            },
        }
        AssistantWidget {}
    }
}

/// Honor browser back/forward by re-parsing the location on popstate.
#[cfg(target_arch = "wasm32")]
fn use_history_sync(route: Signal<Route>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use_effect(move || {
        let mut route = route;
        let on_popstate = Closure::<dyn FnMut()>::new(move || {
            route.set(Route::parse(&router::current_path()));
        });
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
        // The listener lives for the page's lifetime.
        on_popstate.forget();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn use_history_sync(route: Signal<Route>) {
    let _ = route;
}

#[component]
fn ThemeStyles() -> Element {
    let store = use_theme_store();
    let definition = theme_definition(store.current());
    rsx! {
        document::Link { rel: "stylesheet", href: FOLIO_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn SiteHeader(route: Signal<Route>) -> Element {
    let store = use_theme_store();
    let definition = theme_definition(store.current());
    rsx! {
        header { class: "site-header",
            div {
                class: "{definition.logo_class}",
                onclick: move |_| navigate(route, Route::Home),
                "folio"
            }
            ThemeMenu {}
        }
    }
}

#[component]
fn ThemeMenu() -> Element {
    let store = use_theme_store();
    let mut menu_open = use_signal(|| false);
    let current = store.current();
    let current_label = current.label();
    rsx! {
        div { class: "theme-menu",
            button {
                class: "btn btn-ghost",
                aria_label: "Choose theme",
                onclick: move |_| menu_open.set(!menu_open()),
                "Theme: {current_label}"
            }
            if menu_open() {
                div { class: "theme-options",
                    for (theme, label) in ALL_THEMES.map(|t| (t, t.label())) {
                        button {
                            key: "{label}",
                            class: format_args!(
                                "theme-option {}",
                                if current == theme { "active" } else { "" }
                            ),
                            onclick: move |_| {
                                store.set(theme);
                                menu_open.set(false);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
