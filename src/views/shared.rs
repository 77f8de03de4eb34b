use crate::scrollspy::{ScrollSpy, visible_ratio};
use comrak::{ComrakOptions, markdown_to_html as comrak_render};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::rc::Rc;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    comrak_render(md, &MARKDOWN_OPTIONS)
}

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

pub fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Fallback glyph for a testimonial avatar whose image failed to load.
pub fn author_initial(name: &str) -> String {
    name.chars()
        .find(|c| c.is_alphabetic())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Scroll-spy wiring shared by the home view and the case-study viewer:
/// sections register their mounted nodes, scrolling re-measures them against
/// the scroll container, and the resolver in `scrollspy` picks the active id.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionObserver {
    spy: Signal<ScrollSpy>,
    mounts: Signal<HashMap<&'static str, Rc<MountedData>>>,
    viewport: Signal<Option<Rc<MountedData>>>,
    pub active: Signal<Option<&'static str>>,
}

pub fn use_section_observer(ids: Vec<&'static str>) -> SectionObserver {
    let spy = use_signal(move || ScrollSpy::new(&ids));
    let mounts = use_signal(HashMap::new);
    let viewport = use_signal(|| None);
    let active = use_signal(|| None);
    SectionObserver {
        spy,
        mounts,
        viewport,
        active,
    }
}

impl SectionObserver {
    pub fn register_viewport(&self, node: Rc<MountedData>) {
        let mut viewport = self.viewport;
        viewport.set(Some(node));
        self.refresh();
    }

    pub fn register_section(&self, id: &'static str, node: Rc<MountedData>) {
        let mut mounts = self.mounts;
        mounts.write().insert(id, node);
        self.refresh();
    }

    /// Re-measure every registered section against the container and update
    /// the active id.
    pub fn refresh(&self) {
        let viewport = self.viewport;
        let mounts = self.mounts;
        let mut spy = self.spy;
        let mut active = self.active;
        spawn(async move {
            let Some(container) = viewport() else { return };
            let Ok(container_rect) = container.get_client_rect().await else {
                return;
            };
            let snapshot = mounts();
            for (id, node) in snapshot.iter() {
                if let Ok(rect) = node.get_client_rect().await {
                    let ratio = visible_ratio(
                        rect.min_y(),
                        rect.max_y(),
                        container_rect.min_y(),
                        container_rect.max_y(),
                    );
                    spy.write().observe(*id, ratio);
                }
            }
            active.set(spy.read().active());
        });
    }

    pub fn scroll_to(&self, id: &'static str) {
        let mounts = self.mounts;
        spawn(async move {
            if let Some(node) = mounts().get(id).cloned() {
                let _ = node.scroll_to(ScrollBehavior::Smooth).await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_initial_takes_the_first_letter() {
        assert_eq!(author_initial("Priya N."), "P");
        assert_eq!(author_initial("  daniel"), "D");
        assert_eq!(author_initial("123"), "?");
    }

    #[test]
    fn markdown_renders_inline_emphasis() {
        let html = markdown_to_html("hello *there*");
        assert!(html.contains("<em>there</em>"));
    }
}
