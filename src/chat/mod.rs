pub mod avatar;
pub mod personas;
pub mod state;

pub use personas::{Persona, PersonaProfile, persona_profile};
pub use state::{ChatSession, WidgetState};
