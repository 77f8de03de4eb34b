//! Presentation mode: linearize a view's sections into an ordered slide
//! sequence with a bounded cursor. Slides are shown or hidden by the view;
//! this module only owns the ordering and the cursor rules. Advancing past
//! the last slide or retreating before the first is a no-op.

use crate::content::Section;

/// One slide: a section, or one of its declared sub-slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideRef {
    pub section_id: &'static str,
    /// Index into the section's sub-slides; `None` is the section itself.
    pub sub_slide: Option<usize>,
}

/// Expand sections (and their sub-slides, in order) into one flat sequence.
pub fn linearize(sections: &[Section]) -> Vec<SlideRef> {
    let mut slides = Vec::new();
    for section in sections {
        slides.push(SlideRef {
            section_id: section.id,
            sub_slide: None,
        });
        for (i, _) in section.slides.iter().enumerate() {
            slides.push(SlideRef {
                section_id: section.id,
                sub_slide: Some(i),
            });
        }
    }
    slides
}

#[derive(Clone, Debug, Default)]
pub struct SlideDeck {
    slides: Vec<SlideRef>,
    index: usize,
}

impl SlideDeck {
    pub fn new(sections: &[Section]) -> Self {
        Self {
            slides: linearize(sections),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides(&self) -> &[SlideRef] {
        &self.slides
    }

    pub fn current(&self) -> Option<SlideRef> {
        self.slides.get(self.index).copied()
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.slides.is_empty() || self.index == self.slides.len() - 1
    }

    pub fn next(&mut self) {
        if !self.at_end() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        if !self.at_start() {
            self.index -= 1;
        }
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        if !self.slides.is_empty() {
            self.index = self.slides.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, Section};

    fn sections() -> Vec<Section> {
        vec![
            Section {
                id: "context",
                title: "Context",
                blocks: vec![Block::Paragraph("background")],
                slides: vec![],
            },
            Section {
                id: "research",
                title: "Research",
                blocks: vec![Block::Paragraph("findings")],
                slides: vec![
                    Block::Paragraph("interview round"),
                    Block::Paragraph("survey results"),
                ],
            },
            Section {
                id: "outcome",
                title: "Outcome",
                blocks: vec![Block::Paragraph("impact")],
                slides: vec![],
            },
        ]
    }

    #[test]
    fn linearize_interleaves_sub_slides_in_order() {
        let slides = linearize(&sections());
        let ids: Vec<(&str, Option<usize>)> = slides
            .iter()
            .map(|s| (s.section_id, s.sub_slide))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("context", None),
                ("research", None),
                ("research", Some(0)),
                ("research", Some(1)),
                ("outcome", None),
            ]
        );
    }

    #[test]
    fn prev_on_first_slide_is_a_no_op() {
        let mut deck = SlideDeck::new(&sections());
        assert!(deck.at_start());
        deck.prev();
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn next_on_last_slide_is_a_no_op() {
        let mut deck = SlideDeck::new(&sections());
        deck.last();
        assert!(deck.at_end());
        let last = deck.index();
        deck.next();
        assert_eq!(deck.index(), last);
        assert_eq!(last, deck.len() - 1);
    }

    #[test]
    fn home_and_end_jump_to_the_boundaries() {
        let mut deck = SlideDeck::new(&sections());
        deck.next();
        deck.next();
        deck.first();
        assert_eq!(deck.index(), 0);
        deck.last();
        assert_eq!(deck.index(), deck.len() - 1);
    }

    #[test]
    fn empty_deck_is_safe() {
        let mut deck = SlideDeck::new(&[]);
        assert!(deck.is_empty());
        assert!(deck.current().is_none());
        deck.next();
        deck.prev();
        deck.last();
        assert_eq!(deck.index(), 0);
    }
}
