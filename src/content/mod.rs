//! Structured site content. Case studies are data consumed by one generic
//! document viewer; the home view draws on the profile tables below.

mod case_studies;

use once_cell::sync::Lazy;

pub use case_studies::case_studies;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Image { src: &'static str, alt: &'static str },
    Quote { text: &'static str, attribution: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub blocks: Vec<Block>,
    /// Sub-slides shown only in presentation mode, after the section slide.
    pub slides: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: Vec<Section>,
}

impl CaseStudy {
    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.id).collect()
    }
}

pub fn case_study(slug: &str) -> Option<&'static CaseStudy> {
    case_studies().iter().find(|cs| cs.slug == slug)
}

// --- home view content ---

pub const HOME_SECTION_IDS: [&str; 5] = ["hero", "work", "experience", "testimonials", "contact"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar_src: &'static str,
}

pub static EXPERIENCE: Lazy<Vec<ExperienceEntry>> = Lazy::new(|| {
    vec![
        ExperienceEntry {
            company: "Hiver",
            role: "Lead Product Designer",
            period: "2021 - present",
            summary: "Owned analytics and the agent experience across the shared-inbox \
                      product; led the experience redesign.",
        },
        ExperienceEntry {
            company: "IBC",
            role: "Product Designer",
            period: "2018 - 2021",
            summary: "Built the franchise portal and the design system that now powers \
                      every IBC property.",
        },
        ExperienceEntry {
            company: "Freelance",
            role: "Designer & Illustrator",
            period: "2015 - 2018",
            summary: "Brand and product work for early-stage teams.",
        },
    ]
});

pub static TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    vec![
        Testimonial {
            quote: "Arjun turns fuzzy problems into crisp, shippable design. The \
                    analytics work moved our activation numbers within a quarter.",
            author: "Priya N.",
            role: "VP Product, Hiver",
            avatar_src: "/images/testimonials/priya.jpg",
        },
        Testimonial {
            quote: "The design system paid for itself in six months. Engineers stopped \
                    asking what a button looks like.",
            author: "Daniel O.",
            role: "Engineering Manager, IBC",
            avatar_src: "/images/testimonials/daniel.jpg",
        },
        Testimonial {
            quote: "Rare mix of craft and systems thinking.",
            author: "Mei L.",
            role: "Design Director",
            avatar_src: "/images/testimonials/mei.jpg",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::CASE_STUDY_SLUGS;

    #[test]
    fn every_routed_slug_has_content() {
        for slug in CASE_STUDY_SLUGS {
            let cs = case_study(slug).expect("routed slug missing content");
            assert_eq!(cs.slug, slug);
            assert!(!cs.sections.is_empty());
        }
    }

    #[test]
    fn section_ids_are_unique_within_a_case_study() {
        for cs in case_studies() {
            let mut ids = cs.section_ids();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(before, ids.len(), "duplicate section id in {}", cs.slug);
        }
    }

    #[test]
    fn unknown_slug_has_no_content() {
        assert!(case_study("not-a-case-study").is_none());
    }
}
