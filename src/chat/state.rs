//! Conversation session state and the widget state machine.
//!
//! The widget cycles Fab -> Opening -> Open -> Closing -> Fab. Opening and
//! Closing settle on the rendering layer's transition-complete signal. Every
//! return to Fab wipes the conversation; a generation counter tags in-flight
//! requests so a reply that lands after a reset is dropped instead of writing
//! into the fresh session.

use crate::chat::personas::{Persona, persona_profile};
use crate::types::ChatMessage;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Fab,
    Opening,
    Open,
    Closing,
}

pub const GENERIC_APOLOGY: &str =
    "Sorry, I ran into a problem answering that. Mind sending it again?";

pub const RATE_LIMIT_APOLOGY: &str = "Sorry, I've used up my conversation quota for now. \
     Please email arjun@folio.design directly and he'll get back to you.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnFailure {
    RateLimited,
    Other,
}

/// Heuristic match on the provider's error text. Rate-limit shaped failures
/// get a different apology than everything else.
pub fn classify_failure(message: &str) -> TurnFailure {
    if message.contains("Rate limit")
        || message.contains("429")
        || message.contains("tokens per day")
    {
        TurnFailure::RateLimited
    } else {
        TurnFailure::Other
    }
}

pub fn apology_for(message: &str) -> &'static str {
    match classify_failure(message) {
        TurnFailure::RateLimited => RATE_LIMIT_APOLOGY,
        TurnFailure::Other => GENERIC_APOLOGY,
    }
}

/// Everything a send operation needs, captured atomically when the turn
/// starts: the generation tag, the placeholder slot, and the outbound request.
#[derive(Clone, Debug)]
pub struct OutboundTurn {
    pub generation: u64,
    pub placeholder_index: usize,
    pub prompt: String,
    pub history: Vec<ChatMessage>,
    pub persona: Option<Persona>,
}

#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    pub widget: WidgetState,
    pub persona: Option<Persona>,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    generation: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // --- widget state machine ---

    pub fn open_requested(&mut self) {
        if self.widget == WidgetState::Fab {
            self.widget = WidgetState::Opening;
        }
    }

    pub fn open_settled(&mut self) {
        if self.widget == WidgetState::Opening {
            self.widget = WidgetState::Open;
        }
    }

    pub fn close_requested(&mut self) {
        if self.widget == WidgetState::Open {
            self.widget = WidgetState::Closing;
        }
    }

    /// Closing transition finished: back to the idle button, conversation
    /// discarded. Anything still streaming against the old generation becomes
    /// a no-op.
    pub fn close_settled(&mut self) {
        if self.widget == WidgetState::Closing {
            self.widget = WidgetState::Fab;
            self.persona = None;
            self.messages.clear();
            self.is_loading = false;
            self.generation += 1;
        }
    }

    // --- persona selection ---

    /// The persona prompt is shown while open with no persona chosen and
    /// nothing said yet.
    pub fn needs_persona(&self) -> bool {
        self.persona.is_none() && self.messages.is_empty()
    }

    pub fn select_persona(&mut self, persona: Persona, now: Option<OffsetDateTime>) {
        if self.persona.is_some() {
            return;
        }
        self.persona = Some(persona);
        let mut greeting = ChatMessage::assistant(persona_profile(persona).greeting);
        greeting.created_at = now;
        self.messages.push(greeting);
    }

    // --- send operation ---

    /// Accept `text` as a new user turn. Returns `None` when the input is
    /// blank or a request is already outstanding (single-flight).
    pub fn begin_turn(&mut self, text: &str, now: Option<OffsetDateTime>) -> Option<OutboundTurn> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_loading {
            return None;
        }

        // Prior turns, minus the canned persona greeting.
        let skip_greeting = usize::from(self.persona.is_some());
        let history: Vec<ChatMessage> = self
            .messages
            .iter()
            .skip(skip_greeting)
            .cloned()
            .collect();

        let mut user = ChatMessage::user(trimmed);
        user.created_at = now;
        self.messages.push(user);

        let placeholder_index = self.messages.len();
        let mut placeholder = ChatMessage::assistant("");
        placeholder.created_at = now;
        self.messages.push(placeholder);

        self.is_loading = true;

        Some(OutboundTurn {
            generation: self.generation,
            placeholder_index,
            prompt: trimmed.to_string(),
            history,
            persona: self.persona,
        })
    }

    /// Overwrite the placeholder with the cumulative streamed text. Returns
    /// false when the turn belongs to a discarded session.
    pub fn apply_chunk(&mut self, turn: &OutboundTurn, cumulative: &str) -> bool {
        if turn.generation != self.generation {
            return false;
        }
        if let Some(slot) = self.messages.get_mut(turn.placeholder_index) {
            slot.content.clear();
            slot.content.push_str(cumulative);
            return true;
        }
        false
    }

    /// Settle the turn. `error` is the provider's failure text, if any; a
    /// clean finish with an empty placeholder is treated the same as a
    /// failure (the no-response condition).
    pub fn finish_turn(&mut self, turn: &OutboundTurn, error: Option<&str>) {
        if turn.generation != self.generation {
            return;
        }
        self.is_loading = false;
        let Some(slot) = self.messages.get_mut(turn.placeholder_index) else {
            return;
        };
        match error {
            Some(message) => slot.content = apology_for(message).to_string(),
            None if slot.content.is_empty() => slot.content = GENERIC_APOLOGY.to_string(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn open_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.open_requested();
        session.open_settled();
        session
    }

    #[test]
    fn widget_cycle_reaches_every_state_in_order() {
        let mut session = ChatSession::new();
        assert_eq!(session.widget, WidgetState::Fab);
        session.open_requested();
        assert_eq!(session.widget, WidgetState::Opening);
        session.open_settled();
        assert_eq!(session.widget, WidgetState::Open);
        session.close_requested();
        assert_eq!(session.widget, WidgetState::Closing);
        session.close_settled();
        assert_eq!(session.widget, WidgetState::Fab);
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let mut session = ChatSession::new();
        session.close_requested();
        session.open_settled();
        session.close_settled();
        assert_eq!(session.widget, WidgetState::Fab);

        session.open_requested();
        session.open_requested();
        assert_eq!(session.widget, WidgetState::Opening);
        // A close request cannot interrupt the opening transition.
        session.close_requested();
        assert_eq!(session.widget, WidgetState::Opening);
    }

    #[test]
    fn close_and_reopen_resets_the_conversation() {
        // Select designer, ask a question, stream a reply, close, reopen:
        // the persona prompt is back and the transcript is empty.
        let mut session = open_session();
        session.select_persona(Persona::Designer, None);
        assert!(!session.needs_persona());

        let turn = session.begin_turn("What are you good at?", None).unwrap();
        assert!(session.apply_chunk(&turn, "Design systems"));
        session.finish_turn(&turn, None);

        session.close_requested();
        session.close_settled();
        session.open_requested();
        session.open_settled();

        assert_eq!(session.persona, None);
        assert!(session.messages.is_empty());
        assert!(session.needs_persona());
        assert!(!session.is_loading);
    }

    #[test]
    fn selecting_a_persona_appends_its_greeting_once() {
        let mut session = open_session();
        session.select_persona(Persona::Recruiter, None);
        session.select_persona(Persona::Friend, None);

        assert_eq!(session.persona, Some(Persona::Recruiter));
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, Role::Assistant);
        assert_eq!(
            session.messages[0].content,
            persona_profile(Persona::Recruiter).greeting
        );
    }

    #[test]
    fn begin_turn_rejects_blank_input() {
        let mut session = open_session();
        assert!(session.begin_turn("   ", None).is_none());
        assert!(session.begin_turn("", None).is_none());
        assert!(session.messages.is_empty());
    }

    #[test]
    fn only_one_turn_may_be_outstanding() {
        let mut session = open_session();
        session.select_persona(Persona::Friend, None);
        let first = session.begin_turn("hello", None);
        assert!(first.is_some());

        // Resubmitting while loading has no observable effect.
        let before = session.messages.clone();
        assert!(session.begin_turn("hello again", None).is_none());
        assert_eq!(session.messages, before);

        session.finish_turn(&first.unwrap(), None);
        assert!(session.begin_turn("hello again", None).is_some());
    }

    #[test]
    fn history_excludes_the_greeting_and_current_turn() {
        let mut session = open_session();
        session.select_persona(Persona::Designer, None);

        let first = session.begin_turn("first question", None).unwrap();
        assert!(first.history.is_empty());
        session.apply_chunk(&first, "first answer");
        session.finish_turn(&first, None);

        let second = session.begin_turn("second question", None).unwrap();
        let roles: Vec<Role> = second.history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(second.history[0].content, "first question");
        assert_eq!(second.history[1].content, "first answer");
    }

    #[test]
    fn chunks_accumulate_by_replacement() {
        let mut session = open_session();
        session.select_persona(Persona::Friend, None);
        let turn = session.begin_turn("hi", None).unwrap();

        // The stream delivers cumulative text; the placeholder always holds
        // the full concatenation so far, whatever the chunk boundaries were.
        let mut cumulative = String::new();
        for chunk in ["He", "llo ", "the", "re!"] {
            cumulative.push_str(chunk);
            assert!(session.apply_chunk(&turn, &cumulative));
        }
        session.finish_turn(&turn, None);
        assert_eq!(session.messages[turn.placeholder_index].content, "Hello there!");
    }

    #[test]
    fn stale_generation_writes_are_discarded() {
        let mut session = open_session();
        session.select_persona(Persona::Friend, None);
        let turn = session.begin_turn("hi", None).unwrap();

        session.close_requested();
        session.close_settled();
        session.open_requested();
        session.open_settled();

        assert!(!session.apply_chunk(&turn, "late reply"));
        session.finish_turn(&turn, None);
        assert!(session.messages.is_empty());
        assert!(!session.is_loading);
    }

    #[test]
    fn empty_stream_becomes_the_generic_apology() {
        let mut session = open_session();
        session.select_persona(Persona::Friend, None);
        let turn = session.begin_turn("hi", None).unwrap();
        session.finish_turn(&turn, None);
        assert_eq!(session.messages[turn.placeholder_index].content, GENERIC_APOLOGY);
        assert!(!session.is_loading);
    }

    #[test]
    fn rate_limit_errors_get_the_specific_apology() {
        let mut session = open_session();
        session.select_persona(Persona::Friend, None);
        let turn = session.begin_turn("hi", None).unwrap();
        session.finish_turn(&turn, Some("provider said: 429 Too Many Requests"));
        assert_eq!(
            session.messages[turn.placeholder_index].content,
            RATE_LIMIT_APOLOGY
        );

        let turn = session.begin_turn("hi again", None).unwrap();
        session.finish_turn(&turn, Some("connection refused"));
        assert_eq!(
            session.messages[turn.placeholder_index].content,
            GENERIC_APOLOGY
        );
    }

    #[test]
    fn failure_classification_matches_known_signatures() {
        assert_eq!(classify_failure("Rate limit exceeded"), TurnFailure::RateLimited);
        assert_eq!(classify_failure("HTTP 429"), TurnFailure::RateLimited);
        assert_eq!(
            classify_failure("out of tokens per day for this key"),
            TurnFailure::RateLimited
        );
        assert_eq!(classify_failure("dns lookup failed"), TurnFailure::Other);
    }
}
