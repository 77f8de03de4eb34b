//! Visitor personas and their static conversation profiles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persona {
    Recruiter,
    ProductLeader,
    Designer,
    Friend,
}

pub const ALL_PERSONAS: [Persona; 4] = [
    Persona::Recruiter,
    Persona::ProductLeader,
    Persona::Designer,
    Persona::Friend,
];

impl Persona {
    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Recruiter => "recruiter",
            Persona::ProductLeader => "product-leader",
            Persona::Designer => "designer",
            Persona::Friend => "friend",
        }
    }

    pub fn parse(value: &str) -> Option<Persona> {
        match value {
            "recruiter" => Some(Persona::Recruiter),
            "product-leader" => Some(Persona::ProductLeader),
            "designer" => Some(Persona::Designer),
            "friend" => Some(Persona::Friend),
            _ => None,
        }
    }
}

/// Per-persona chat configuration: picker label, the greeting appended when
/// the persona is chosen, and suggested follow-up questions shown under it.
pub struct PersonaProfile {
    pub persona: Persona,
    pub label: &'static str,
    pub greeting: &'static str,
    pub suggested: &'static [&'static str],
}

pub fn persona_profile(persona: Persona) -> &'static PersonaProfile {
    PERSONA_PROFILES
        .iter()
        .find(|profile| profile.persona == persona)
        .expect("profile table covers every persona")
}

pub static PERSONA_PROFILES: [PersonaProfile; 4] = [
    PersonaProfile {
        persona: Persona::Recruiter,
        label: "I'm hiring",
        greeting: "Hi! Happy to talk shop. Ask me about the roles Arjun has held, \
                   the teams he has led, or what he is looking for next.",
        suggested: &[
            "Walk me through your experience",
            "What kind of role are you looking for?",
            "Are you open to relocation?",
        ],
    },
    PersonaProfile {
        persona: Persona::ProductLeader,
        label: "I lead a product team",
        greeting: "Hello! I can speak to how Arjun partners with product: discovery, \
                   metrics, trade-offs, and shipping. What would you like to dig into?",
        suggested: &[
            "How do you work with product managers?",
            "Tell me about a metrics-driven project",
            "How do you handle scope cuts?",
        ],
    },
    PersonaProfile {
        persona: Persona::Designer,
        label: "I'm a designer",
        greeting: "Hey, nice to meet a fellow designer! Ask me about process, design \
                   systems, or any of the case studies on this site.",
        suggested: &[
            "What are you good at?",
            "How was the IBC design system built?",
            "What tools do you use day to day?",
        ],
    },
    PersonaProfile {
        persona: Persona::Friend,
        label: "Just browsing",
        greeting: "Hi there! I'm the resident guide around here. Ask me anything about \
                   Arjun's work, or just poke around the case studies.",
        suggested: &[
            "What is this site about?",
            "What does Arjun do?",
            "Show me something interesting",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for persona in ALL_PERSONAS {
            assert_eq!(Persona::parse(persona.as_str()), Some(persona));
        }
        assert_eq!(Persona::parse("stranger"), None);
    }

    #[test]
    fn every_persona_has_a_profile() {
        for persona in ALL_PERSONAS {
            let profile = persona_profile(persona);
            assert_eq!(profile.persona, persona);
            assert!(!profile.greeting.is_empty());
            assert!(!profile.suggested.is_empty());
        }
    }
}
