//! Generic long-form case-study viewer.
//!
//! All five case studies render through this one component, parameterized by
//! their structured content: sections of blocks, a floating table of contents
//! with an animated indicator, scroll-spy highlighting, a presentation-mode
//! overlay, and an image lightbox.

use crate::content::{self, Block, CaseStudy, Section};
use crate::presentation::SlideDeck;
use crate::router::Route;
use crate::ui::navigate;
use crate::views::lightbox::Lightbox;
use crate::views::shared::{SectionObserver, use_section_observer};
use dioxus::events::Key;
use dioxus::prelude::*;

const TOC_ROW_HEIGHT_PX: usize = 34;

#[component]
pub fn CaseStudyView(slug: &'static str, route: Signal<Route>) -> Element {
    // Routed slugs always have content; an unknown slug has already fallen
    // back to home in the router.
    let Some(study) = content::case_study(slug) else {
        return rsx! {};
    };

    let observer = use_section_observer(study.section_ids());
    let presenting = use_signal(|| false);
    let lightbox = use_signal(|| Option::<(&'static str, &'static str)>::None);

    rsx! {
        main {
            class: "page",
            onmounted: move |ev| observer.register_viewport(ev.data()),
            onscroll: move |_| observer.refresh(),

            header { class: "doc-header",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| navigate(route, Route::Home),
                    "\u{2190} Home"
                }
                h1 { "{study.title}" }
                p { class: "text-muted", "{study.summary}" }
                button {
                    class: "btn btn-primary",
                    onclick: {
                        let mut presenting = presenting;
                        move |_| presenting.set(true)
                    },
                    "Present"
                }
            }

            for section in &study.sections {
                DocSection {
                    key: "{section.id}",
                    section: section.clone(),
                    observer,
                    lightbox,
                }
            }
        }

        TocWidget { study: study.clone(), observer }

        if presenting() {
            PresentationOverlay { study: study.clone(), presenting }
        }
        if let Some((src, alt)) = lightbox() {
            Lightbox { src, alt, state: lightbox }
        }
    }
}

#[component]
fn DocSection(
    section: Section,
    observer: SectionObserver,
    lightbox: Signal<Option<(&'static str, &'static str)>>,
) -> Element {
    let id = section.id;
    rsx! {
        section {
            id: "{id}",
            class: "section doc-section",
            onmounted: move |ev| observer.register_section(id, ev.data()),
            h2 { class: "section-title", "{section.title}" }
            for (i, block) in section.blocks.iter().enumerate() {
                ContentBlock { key: "{id}-{i}", block: block.clone(), lightbox }
            }
        }
    }
}

#[component]
fn ContentBlock(
    block: Block,
    lightbox: Signal<Option<(&'static str, &'static str)>>,
) -> Element {
    let mut lightbox = lightbox;
    let mut image_failed = use_signal(|| false);
    match block {
        Block::Paragraph(text) => rsx! {
            p { "{text}" }
        },
        Block::Image { src, alt } => rsx! {
            if !image_failed() {
                img {
                    class: "doc-image",
                    src: "{src}",
                    alt: "{alt}",
                    onclick: move |_| lightbox.set(Some((src, alt))),
                    onerror: move |_| {
                        tracing::debug!(src, "case-study image failed to load");
                        image_failed.set(true);
                    },
                }
            }
        },
        Block::Quote { text, attribution } => rsx! {
            blockquote { class: "doc-quote",
                p { "\u{201c}{text}\u{201d}" }
                cite { "{attribution}" }
            }
        },
    }
}

#[component]
fn TocWidget(study: CaseStudy, observer: SectionObserver) -> Element {
    let active = observer.active;
    let active_index = study
        .sections
        .iter()
        .position(|s| Some(s.id) == active())
        .unwrap_or(0);
    let indicator_style = format!("top: {}px;", active_index * TOC_ROW_HEIGHT_PX);

    rsx! {
        aside { class: "toc",
            div { class: "toc-indicator", style: "{indicator_style}" }
            for section in &study.sections {
                button {
                    key: "{section.id}",
                    class: format_args!(
                        "toc-item {}",
                        if active() == Some(section.id) { "active" } else { "" }
                    ),
                    onclick: {
                        let id = section.id;
                        move |_| observer.scroll_to(id)
                    },
                    "{section.title}"
                }
            }
        }
    }
}

#[component]
fn PresentationOverlay(study: CaseStudy, presenting: Signal<bool>) -> Element {
    let mut presenting = presenting;
    let mut deck = use_signal({
        let sections = study.sections.clone();
        move || SlideDeck::new(&sections)
    });

    let handle_key = move |ev: KeyboardEvent| {
        let key = ev.key();
        if key == Key::Escape {
            presenting.set(false);
        } else if key == Key::ArrowRight {
            deck.write().next();
        } else if key == Key::ArrowLeft {
            deck.write().prev();
        } else if key == Key::Character(" ".into()) {
            ev.prevent_default();
            if ev.modifiers().shift() {
                deck.write().prev();
            } else {
                deck.write().next();
            }
        } else if key == Key::Home {
            deck.write().first();
        } else if key == Key::End {
            deck.write().last();
        }
    };

    let snapshot = deck();
    let current_index = snapshot.index();
    let counter = format!("{} / {}", current_index + 1, snapshot.len());

    rsx! {
        div {
            class: "presentation-overlay",
            tabindex: "0",
            autofocus: true,
            onkeydown: handle_key,

            // Every slide stays mounted; only the current one is shown.
            for (i, slide) in snapshot.slides().iter().enumerate() {
                div {
                    key: "{slide.section_id}-{i}",
                    class: format_args!(
                        "slide {}",
                        if i == current_index { "visible" } else { "" }
                    ),
                    SlideContent { study: study.clone(), slide: *slide }
                }
            }

            footer { class: "presentation-controls",
                button {
                    class: "btn",
                    disabled: snapshot.at_start(),
                    onclick: move |_| deck.write().prev(),
                    "Previous"
                }
                span { class: "slide-counter", "{counter}" }
                button {
                    class: "btn",
                    disabled: snapshot.at_end(),
                    onclick: move |_| deck.write().next(),
                    "Next"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| presenting.set(false),
                    "Exit"
                }
            }
        }
    }
}

#[component]
fn SlideContent(study: CaseStudy, slide: crate::presentation::SlideRef) -> Element {
    let Some(section) = study.sections.iter().find(|s| s.id == slide.section_id) else {
        return rsx! {};
    };
    match slide.sub_slide {
        None => rsx! {
            h2 { "{section.title}" }
            for (i, block) in section.blocks.iter().enumerate() {
                StaticBlock { key: "{i}", block: block.clone() }
            }
        },
        Some(j) => rsx! {
            h3 { class: "text-muted", "{section.title}" }
            if let Some(block) = section.slides.get(j) {
                StaticBlock { block: block.clone() }
            }
        },
    }
}

/// Block rendering without lightbox or error wiring, for slides.
#[component]
fn StaticBlock(block: Block) -> Element {
    match block {
        Block::Paragraph(text) => rsx! {
            p { class: "slide-text", "{text}" }
        },
        Block::Image { src, alt } => rsx! {
            img { class: "doc-image", src: "{src}", alt: "{alt}" }
        },
        Block::Quote { text, attribution } => rsx! {
            blockquote { class: "doc-quote",
                p { "\u{201c}{text}\u{201d}" }
                cite { "{attribution}" }
            }
        },
    }
}
