use crate::content::{self, HOME_SECTION_IDS, Testimonial};
use crate::router::Route;
use crate::ui::navigate;
use crate::views::shared::{author_initial, use_section_observer};
use dioxus::prelude::*;

#[component]
pub fn HomeView(route: Signal<Route>) -> Element {
    let observer = use_section_observer(HOME_SECTION_IDS.to_vec());

    rsx! {
        main {
            class: "page",
            onmounted: move |ev| observer.register_viewport(ev.data()),
            onscroll: move |_| observer.refresh(),

            section {
                id: "hero",
                class: "section hero",
                onmounted: move |ev| observer.register_section("hero", ev.data()),
                h1 { "Arjun. Product designer." }
                p { class: "hero-lede",
                    "I design systems and workflows for support teams and franchises. \
                     Currently leading product design at Hiver."
                }
            }

            section {
                id: "work",
                class: "section",
                onmounted: move |ev| observer.register_section("work", ev.data()),
                h2 { class: "section-title", "Selected work" }
                div { class: "card-grid",
                    for study in content::case_studies() {
                        article {
                            key: "{study.slug}",
                            class: "case-card",
                            onclick: {
                                let slug = study.slug;
                                move |_| navigate(route, Route::CaseStudy(slug))
                            },
                            h3 { "{study.title}" }
                            p { class: "text-muted", "{study.summary}" }
                        }
                    }
                }
            }

            section {
                id: "experience",
                class: "section",
                onmounted: move |ev| observer.register_section("experience", ev.data()),
                h2 { class: "section-title", "Experience" }
                ol { class: "timeline",
                    for entry in content::EXPERIENCE.iter() {
                        li { key: "{entry.company}", class: "timeline-entry",
                            div { class: "timeline-period", "{entry.period}" }
                            div { class: "timeline-body",
                                h3 { "{entry.role} · {entry.company}" }
                                p { class: "text-muted", "{entry.summary}" }
                            }
                        }
                    }
                }
            }

            section {
                id: "testimonials",
                class: "section",
                onmounted: move |ev| observer.register_section("testimonials", ev.data()),
                h2 { class: "section-title", "Kind words" }
                div { class: "card-grid",
                    for (i, testimonial) in content::TESTIMONIALS.iter().enumerate() {
                        TestimonialCard { key: "{i}", testimonial: *testimonial }
                    }
                }
            }

            section {
                id: "contact",
                class: "section",
                onmounted: move |ev| observer.register_section("contact", ev.data()),
                h2 { class: "section-title", "Say hello" }
                p {
                    "The fastest way to reach Arjun is "
                    a { href: "mailto:arjun@folio.design", "arjun@folio.design" }
                    ". Or ask the assistant in the corner."
                }
            }
        }

        BottomNav { observer }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    let mut image_failed = use_signal(|| false);
    let initial = author_initial(testimonial.author);
    rsx! {
        figure { class: "testimonial",
            blockquote { "\u{201c}{testimonial.quote}\u{201d}" }
            figcaption { class: "testimonial-author",
                if image_failed() {
                    div { class: "avatar-initial", "{initial}" }
                } else {
                    img {
                        class: "avatar",
                        src: "{testimonial.avatar_src}",
                        alt: "{testimonial.author}",
                        onerror: move |_| {
                            tracing::debug!(author = testimonial.author, "avatar failed to load");
                            image_failed.set(true);
                        },
                    }
                }
                div {
                    div { "{testimonial.author}" }
                    div { class: "text-muted", "{testimonial.role}" }
                }
            }
        }
    }
}

#[component]
fn BottomNav(observer: crate::views::shared::SectionObserver) -> Element {
    let active = observer.active;
    let labels: [(&str, &str); 5] = [
        ("hero", "Top"),
        ("work", "Work"),
        ("experience", "Experience"),
        ("testimonials", "Testimonials"),
        ("contact", "Contact"),
    ];
    rsx! {
        nav { class: "bottom-nav",
            for (id, label) in labels {
                button {
                    key: "{id}",
                    class: format_args!(
                        "nav-item {}",
                        if active() == Some(id) { "active" } else { "" }
                    ),
                    onclick: move |_| observer.scroll_to(id),
                    "{label}"
                }
            }
        }
    }
}
