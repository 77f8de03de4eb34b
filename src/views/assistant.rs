//! The embedded AI assistant: a floating orb that docks into a slide-in
//! conversation panel.
//!
//! The orb element is always mounted; widget states only change its transform
//! target. The panel is likewise kept mounted (hidden while idle) so the dock
//! anchor can be measured before the first open. Transition-end events from
//! the orb advance the state machine.

use crate::ai::{
    assistant_reply_stream_discard, assistant_reply_stream_poll, assistant_reply_stream_start,
};
use crate::chat::avatar::{AnchorRect, AnchorTracker};
use crate::chat::personas::{PERSONA_PROFILES, persona_profile};
use crate::chat::state::{ChatSession, OutboundTurn, WidgetState};
use crate::types::Role;
use crate::views::shared::{current_time, format_message_timestamp, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;
use std::time::Duration;

const STREAM_POLL_INTERVAL: Duration = Duration::from_millis(80);

#[component]
pub fn AssistantWidget() -> Element {
    let mut session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);
    let mut anchors = use_signal(AnchorTracker::new);
    let mut fab_node = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut dock_node = use_signal(|| Option::<Rc<MountedData>>::None);

    let remeasure = move || {
        let mut anchors = anchors;
        spawn(async move {
            if let Some(node) = fab_node() {
                if let Ok(rect) = node.get_client_rect().await {
                    anchors.write().set_fab(AnchorRect {
                        x: rect.min_x(),
                        y: rect.min_y(),
                        width: rect.width(),
                        height: rect.height(),
                    });
                }
            }
            if let Some(node) = dock_node() {
                if let Ok(rect) = node.get_client_rect().await {
                    anchors.write().set_dock(AnchorRect {
                        x: rect.min_x(),
                        y: rect.min_y(),
                        width: rect.width(),
                        height: rect.height(),
                    });
                }
            }
        });
    };

    let mut send_message = move |text: String| {
        let Some(turn) = session.write().begin_turn(&text, Some(current_time())) else {
            return;
        };
        input.set(String::new());
        spawn(async move {
            run_turn(session, turn).await;
        });
    };

    let mut close_panel = move || {
        anchors.write().freeze();
        session.write().close_requested();
    };

    let snapshot = session();
    let widget = snapshot.widget;
    // Until both anchors are measured the orb has no position to sit at.
    let orb_style = anchors()
        .target(widget)
        .map(|t| {
            format!(
                "transform: translate({:.1}px, {:.1}px) translate(-50%, -50%) scale({:.3});",
                t.x, t.y, t.scale
            )
        })
        .unwrap_or_else(|| "visibility: hidden;".to_string());

    let panel_class = match widget {
        WidgetState::Fab => "assistant-panel hidden",
        WidgetState::Opening => "assistant-panel opening",
        WidgetState::Open => "assistant-panel open",
        WidgetState::Closing => "assistant-panel closing",
    };
    let orb_class = if widget == WidgetState::Fab {
        "assistant-orb idle"
    } else {
        "assistant-orb"
    };
    let placeholder = if snapshot.needs_persona() {
        "Pick a persona to start"
    } else {
        "Ask anything"
    };

    rsx! {
        // Fires on viewport changes; the tracker drops updates mid-transition.
        div { class: "resize-sentinel", onresize: move |_| remeasure() }

        // Idle-position anchor for the orb, bottom-right corner.
        div {
            class: "orb-anchor-fab",
            onmounted: move |ev| {
                fab_node.set(Some(ev.data()));
                remeasure();
            },
        }

        div {
            class: "{orb_class}",
            style: "{orb_style}",
            role: "button",
            aria_label: "Chat with the site assistant",
            onclick: move |_| {
                if session().widget == WidgetState::Fab {
                    anchors.write().freeze();
                    session.write().open_requested();
                }
            },
            ontransitionend: move |_| {
                match session().widget {
                    WidgetState::Opening => {
                        session.write().open_settled();
                        anchors.write().release();
                    }
                    WidgetState::Closing => {
                        session.write().close_settled();
                        anchors.write().release();
                        input.set(String::new());
                    }
                    _ => {}
                }
            },
        }

        section {
            class: "{panel_class}",
            tabindex: "0",
            aria_hidden: (widget == WidgetState::Fab).to_string(),
            onkeydown: move |ev| {
                if ev.key() == Key::Escape && session().widget == WidgetState::Open {
                    close_panel();
                }
            },

            header { class: "assistant-header",
                div {
                    class: "orb-dock",
                    onmounted: move |ev| {
                        dock_node.set(Some(ev.data()));
                        remeasure();
                    },
                }
                div { class: "assistant-title",
                    h2 { "Ask me about Arjun" }
                    p { class: "text-muted", "Answers come from his work history and case studies." }
                }
                button {
                    class: "btn btn-ghost",
                    aria_label: "Close chat",
                    onclick: move |_| close_panel(),
                    "\u{00d7}"
                }
            }

            if snapshot.needs_persona() {
                PersonaPicker { session }
            } else {
                MessageList { session }
                if show_suggestions(&snapshot) {
                    SuggestionChips { session, on_pick: move |q: String| send_message(q) }
                }
            }

            form { class: "composer",
                textarea {
                    rows: "1",
                    placeholder: "{placeholder}",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            let text = input();
                            send_message(text);
                        }
                    },
                    disabled: snapshot.is_loading || snapshot.needs_persona(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: snapshot.is_loading
                        || snapshot.needs_persona()
                        || input().trim().is_empty(),
                    onclick: move |_| {
                        let text = input();
                        send_message(text);
                    },
                    "Send"
                }
            }
        }
    }
}

/// Suggested follow-ups are shown only while the transcript is just the
/// persona greeting.
fn show_suggestions(session: &ChatSession) -> bool {
    session.persona.is_some() && session.messages.len() == 1 && !session.is_loading
}

/// Drive one turn to completion: poll the stream, mirror its cumulative text
/// into the placeholder, settle with the failure text if any. A session reset
/// mid-stream makes every write a no-op and ends the loop.
async fn run_turn(mut session: Signal<ChatSession>, turn: OutboundTurn) {
    match assistant_reply_stream_start(turn.prompt.clone(), turn.history.clone(), turn.persona).await
    {
        Ok(stream_id) => {
            loop {
                match assistant_reply_stream_poll(stream_id).await {
                    Ok(stream) => {
                        if !session.write().apply_chunk(&turn, &stream.text) {
                            // Stale generation: the panel was closed.
                            break;
                        }
                        if stream.done {
                            session.write().finish_turn(&turn, stream.error.as_deref());
                            break;
                        }
                    }
                    Err(err) => {
                        session.write().finish_turn(&turn, Some(&err.to_string()));
                        break;
                    }
                }
                tokio::time::sleep(STREAM_POLL_INTERVAL).await;
            }
            assistant_reply_stream_discard(stream_id);
        }
        Err(err) => session.write().finish_turn(&turn, Some(&err.to_string())),
    }
}

#[component]
fn PersonaPicker(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    rsx! {
        div { class: "persona-picker",
            h3 { "Who are you?" }
            p { class: "text-muted", "I'll tune my answers to what you care about." }
            div { class: "persona-options",
                for profile in PERSONA_PROFILES.iter() {
                    button {
                        key: "{profile.label}",
                        class: "persona-option",
                        onclick: {
                            let persona = profile.persona;
                            move |_| session.write().select_persona(persona, Some(current_time()))
                        },
                        "{profile.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionChips(session: Signal<ChatSession>, on_pick: EventHandler<String>) -> Element {
    let persona = session().persona;
    let Some(persona) = persona else {
        return rsx! {};
    };
    rsx! {
        div { class: "suggestion-chips",
            for question in persona_profile(persona).suggested.iter() {
                button {
                    key: "{question}",
                    class: "chip",
                    onclick: move |_| on_pick.call((*question).to_string()),
                    "{question}"
                }
            }
        }
    }
}

#[component]
fn MessageList(session: Signal<ChatSession>) -> Element {
    let snapshot = session();
    let loading = snapshot.is_loading;
    rsx! {
        div { class: "chat-list",
            for (i, msg) in snapshot.messages.iter().enumerate() {
                MessageRow { key: "{i}", message: msg.clone(), loading }
            }
        }
    }
}

#[component]
fn MessageRow(message: crate::types::ChatMessage, loading: bool) -> Element {
    let row_class = if message.is_user() {
        "message-row user"
    } else {
        "message-row assistant"
    };
    let pending = message.role == Role::Assistant && message.content.is_empty() && loading;
    let content_html = markdown_to_html(&message.content);
    let timestamp = format_message_timestamp(message.created_at);
    rsx! {
        div { class: "{row_class}",
            div { class: "message-stack",
                if pending {
                    div { class: "bubble assistant",
                        span { class: "shimmer-text", "Thinking\u{2026}" }
                    }
                } else if message.role == Role::Assistant {
                    div { class: "bubble assistant",
                        div { class: "md", dangerous_inner_html: "{content_html}" }
                    }
                } else {
                    div { class: "bubble user", "{message.content}" }
                }
                if let Some(ts) = timestamp {
                    div { class: "message-meta", span { class: "message-timestamp", "{ts}" } }
                }
            }
        }
    }
}
