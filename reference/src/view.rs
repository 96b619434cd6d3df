use std::fmt;

/// The three topic views of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Isa,
    Alu,
    BranchPrediction,
}

impl View {
    pub const ALL: [Self; 3] = [Self::Isa, Self::Alu, Self::BranchPrediction];

    /// Tab caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Isa => "ISA",
            Self::Alu => "ALU Deep Dive",
            Self::BranchPrediction => "Branch Prediction",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutually exclusive tab state. Starts on [`View::Isa`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: View,
}

impl ViewSelector {
    pub const fn new() -> Self {
        Self { active: View::Isa }
    }

    pub const fn active(&self) -> View {
        self.active
    }

    /// Makes `view` the active one. Returns `false` if it already was.
    pub fn select(&mut self, view: View) -> bool {
        let changed = self.active != view;
        self.active = view;
        changed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{View, ViewSelector};

    #[test]
    fn starts_on_isa() {
        assert_eq!(ViewSelector::new().active(), View::Isa);
        assert_eq!(ViewSelector::default().active(), View::Isa);
    }

    #[test]
    fn select_switches_unconditionally() {
        let mut views = ViewSelector::new();

        assert!(views.select(View::Alu));
        assert!(views.select(View::BranchPrediction));
        assert_eq!(views.active(), View::BranchPrediction);
    }

    #[test]
    fn reselecting_the_active_view_is_a_no_op() {
        let mut views = ViewSelector::new();
        views.select(View::Alu);

        assert!(!views.select(View::Alu));
        assert_eq!(views.active(), View::Alu);
    }

    #[test]
    fn labels() {
        let labels: Vec<String> = View::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(labels, vec!["ISA", "ALU Deep Dive", "Branch Prediction"]);
    }
}
