use dioxus::prelude::*;

/// Zoomable image modal. Click toggles zoom, the cursor drives the pan origin
/// while zoomed, Escape or the backdrop closes.
#[component]
pub fn Lightbox(
    src: &'static str,
    alt: &'static str,
    state: Signal<Option<(&'static str, &'static str)>>,
) -> Element {
    let mut state = state;
    let mut zoomed = use_signal(|| false);
    let mut origin = use_signal(|| (50.0f64, 50.0f64));

    let image_style = if zoomed() {
        let (x, y) = origin();
        format!("transform: scale(2); transform-origin: {x}px {y}px; cursor: zoom-out;")
    } else {
        "transform: scale(1); cursor: zoom-in;".to_string()
    };

    rsx! {
        div {
            class: "lightbox-backdrop",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| state.set(None),
            onkeydown: move |ev| {
                if ev.key() == Key::Escape {
                    state.set(None);
                }
            },
            img {
                class: "lightbox-image",
                src: "{src}",
                alt: "{alt}",
                style: "{image_style}",
                onclick: move |ev| {
                    // Keep the backdrop's close handler out of it.
                    ev.stop_propagation();
                    zoomed.set(!zoomed());
                },
                onmousemove: move |ev| {
                    if zoomed() {
                        let point = ev.element_coordinates();
                        origin.set((point.x, point.y));
                    }
                },
            }
        }
    }
}
