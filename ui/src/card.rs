use reference::CardState;

/// Hint next to an ALU module title.
pub const fn toggle_hint(state: CardState) -> &'static str {
    match state {
        CardState::Collapsed => "(Click to expand diagram)",
        CardState::Expanded => "(Click to collapse)",
    }
}

/// Caption of the architecture diagram button.
pub const fn diagram_button(state: CardState) -> &'static str {
    match state {
        CardState::Collapsed => "Show Diagram",
        CardState::Expanded => "Hide Diagram",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reference::CardState;

    use super::{diagram_button, toggle_hint};

    #[test]
    fn captions_follow_the_state() {
        assert_eq!(toggle_hint(CardState::Collapsed), "(Click to expand diagram)");
        assert_eq!(toggle_hint(CardState::Expanded), "(Click to collapse)");
        assert_eq!(diagram_button(CardState::Expanded), "Hide Diagram");
        assert_eq!(diagram_button(CardState::Collapsed), "Show Diagram");
    }
}
