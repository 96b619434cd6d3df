use crate::module::DiagramRef;

/// The two states of an expandable card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// A card that reveals its diagram when expanded.
///
/// Collapsing only hides the diagram; the handle is kept, so the rendering
/// layer can serve it from its cache when the card reopens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandableCard {
    state: CardState,
    diagram: Option<DiagramRef>,
}

impl ExpandableCard {
    pub const fn collapsed(diagram: Option<DiagramRef>) -> Self {
        Self {
            state: CardState::Collapsed,
            diagram,
        }
    }

    pub const fn expanded(diagram: Option<DiagramRef>) -> Self {
        Self {
            state: CardState::Expanded,
            diagram,
        }
    }

    pub const fn state(&self) -> CardState {
        self.state
    }

    pub const fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Flips the card and returns the new state.
    pub const fn toggle(&mut self) -> CardState {
        self.state = self.state.toggled();
        self.state
    }

    /// The diagram to draw right now: present only while expanded.
    pub const fn visible_diagram(&self) -> Option<&DiagramRef> {
        match self.state {
            CardState::Expanded => self.diagram.as_ref(),
            CardState::Collapsed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CardState, ExpandableCard};
    use crate::module::DiagramRef;

    fn adder() -> Option<DiagramRef> {
        Some(DiagramRef::new("SIGNED_ADDER.drawio.svg"))
    }

    #[test]
    fn cards_start_collapsed() {
        let card = ExpandableCard::collapsed(adder());

        assert_eq!(card.state(), CardState::Collapsed);
        assert_eq!(card.visible_diagram(), None);
    }

    #[test]
    fn overview_starts_expanded() {
        let card = ExpandableCard::expanded(Some(DiagramRef::new("CPU_OVERVIEW.svg")));

        assert!(card.is_expanded());
        assert_eq!(
            card.visible_diagram().map(DiagramRef::as_str),
            Some("CPU_OVERVIEW.svg")
        );
    }

    #[test]
    fn toggle_shows_and_hides_the_diagram() {
        let mut card = ExpandableCard::collapsed(adder());

        assert_eq!(card.toggle(), CardState::Expanded);
        assert_eq!(card.visible_diagram(), adder().as_ref());

        assert_eq!(card.toggle(), CardState::Collapsed);
        assert_eq!(card.visible_diagram(), None);

        assert_eq!(card.toggle(), CardState::Expanded);
        assert_eq!(card.visible_diagram(), adder().as_ref());
    }

    #[test]
    fn card_without_diagram_still_toggles() {
        let mut card = ExpandableCard::collapsed(None);

        assert_eq!(card.toggle(), CardState::Expanded);
        assert_eq!(card.visible_diagram(), None);
    }

    #[test]
    fn two_toggles_restore_the_state() {
        for start in [
            ExpandableCard::collapsed(adder()),
            ExpandableCard::expanded(adder()),
            ExpandableCard::collapsed(None),
        ] {
            let mut card = start.clone();
            for _ in 0..(1 + rand::random::<u8>() % 8) {
                card.toggle();
                card.toggle();
                assert_eq!(card.state(), start.state());
            }
        }
    }
}
