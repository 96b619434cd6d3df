//! # Reference Browser Application
//!
//! The eframe application that renders one [`DocumentBrowser`] session.
//!
//! ## Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ title                               [ISA] [ALU] [Branch]  │  header
//! │ summary · author · project links                          │
//! ├────────────────────────────────────────────────────────────┤
//! │ Architecture card (Show/Hide Diagram)                     │
//! │ [ search ........................... ]   Results: N      │
//! │ active section: Isa | Alu | BranchPrediction              │  scroll
//! ├────────────────────────────────────────────────────────────┤
//! │ author                                                    │  footer
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input
//!
//! Widgets never mutate state directly: tab clicks go through
//! [`DocumentBrowser::select_view`], query edits through
//! [`DocumentBrowser::set_query`] and card clicks through
//! [`DocumentBrowser::toggle_card`].

use std::sync::Arc;

use reference::{DocumentBrowser, ReferenceData, View};

use crate::{
    alu::Alu, architecture::Architecture, branch_prediction::BranchPrediction,
    diagrams::DiagramResolver, isa::Isa, ui_traits::Section,
};

const SEARCH_HINT: &str = "Search ISA, descriptions or examples...";

/// One renderer per view, plus the architecture card shown above them.
struct Sections {
    architecture: Architecture,
    isa: Isa,
    alu: Alu,
    branch_prediction: BranchPrediction,
}

impl Sections {
    fn new(diagrams: DiagramResolver) -> Self {
        Self {
            architecture: Architecture::new(diagrams.clone()),
            isa: Isa::default(),
            alu: Alu::new(diagrams),
            branch_prediction: BranchPrediction::default(),
        }
    }

    fn view(&mut self, view: View) -> &mut dyn Section {
        match view {
            View::Isa => &mut self.isa,
            View::Alu => &mut self.alu,
            View::BranchPrediction => &mut self.branch_prediction,
        }
    }
}

pub struct App {
    browser: DocumentBrowser,
    sections: Sections,
}

impl App {
    #[must_use]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        data: Arc<ReferenceData>,
        diagrams: DiagramResolver,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        tracing::info!("diagrams resolved from {}", diagrams.root().display());

        Self {
            browser: DocumentBrowser::new(data),
            sections: Sections::new(diagrams),
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        let title = self.browser.reference().title().to_owned();

        ui.horizontal(|ui| {
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let active = self.browser.active_view();
                // right to left, so the tabs go in reversed
                for view in View::ALL.into_iter().rev() {
                    if ui.selectable_label(active == view, view.label()).clicked() {
                        self.browser.select_view(view);
                    }
                }
            });
        });

        let reference = self.browser.reference();
        if !reference.summary().is_empty() {
            ui.label(reference.summary());
        }
        if !reference.author().is_empty() {
            ui.label(
                egui::RichText::new(reference.author())
                    .strong()
                    .color(ui.visuals().hyperlink_color),
            );
        }
        ui.horizontal(|ui| {
            for link in reference.links() {
                ui.hyperlink_to(&link.label, &link.url);
            }
        });
    }

    fn search(&mut self, ui: &mut egui::Ui) {
        let mut query = self.browser.query().to_owned();

        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut query)
                .hint_text(SEARCH_HINT)
                .desired_width(ui.available_width() - 120.0);
            if ui.add(edit).changed() {
                self.browser.set_query(query.as_str());
            }
            ui.weak(format!("Results: {}", self.browser.result_count()));
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("Document Header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.header(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("Document Footer").show(ctx, |ui| {
            ui.weak(self.browser.reference().author());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    show(&mut self.sections.architecture, ui, &mut self.browser);
                    ui.add_space(12.0);

                    self.search(ui);
                    ui.add_space(8.0);

                    let view = self.browser.active_view();
                    show(self.sections.view(view), ui, &mut self.browser);
                });
        });
    }
}

/// Draws a section under its own id scope, so equally named widgets of
/// different sections don't clash.
fn show(section: &mut dyn Section, ui: &mut egui::Ui, browser: &mut DocumentBrowser) {
    ui.push_id(section.name(), |ui| section.ui(ui, browser));
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use pretty_assertions::assert_eq;
    use reference::{DocumentBrowser, ReferenceData, View};

    use super::Sections;
    use crate::{diagrams::DiagramResolver, ui_traits::Section};

    fn browser() -> DocumentBrowser {
        DocumentBrowser::new(Arc::new(ReferenceData::bundled().unwrap()))
    }

    fn rendered(sections: &mut Sections, browser: &DocumentBrowser) -> &'static str {
        sections.view(browser.active_view()).name()
    }

    #[test]
    fn isa_table_is_rendered_first() {
        let mut sections = Sections::new(DiagramResolver::default());

        assert_eq!(rendered(&mut sections, &browser()), "ISA");
    }

    #[test]
    fn switching_tabs_replaces_the_isa_section() {
        let mut sections = Sections::new(DiagramResolver::default());
        let mut browser = browser();

        browser.select_view(View::Alu);
        assert_eq!(rendered(&mut sections, &browser), "ALU");

        browser.select_view(View::BranchPrediction);
        let name = rendered(&mut sections, &browser);
        assert_eq!(name, "Branch Prediction");
        assert!(name != sections.view(View::Isa).name());
    }

    #[test]
    fn every_view_has_its_own_section() {
        let mut sections = Sections::new(DiagramResolver::default());

        let names: HashSet<&str> = View::ALL.iter().map(|&v| sections.view(v).name()).collect();
        assert_eq!(names.len(), View::ALL.len());
        assert!(!names.contains(sections.architecture.name()));
    }
}
