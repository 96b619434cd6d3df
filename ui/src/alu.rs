use reference::{CardId, DocumentBrowser, ExpandableCard, ModuleDescriptor};

use crate::{card::toggle_hint, diagrams::DiagramResolver, ui_traits::Section};

/// One card per ALU module, each revealing its diagram on demand.
pub struct Alu {
    diagrams: DiagramResolver,
}

impl Alu {
    pub const fn new(diagrams: DiagramResolver) -> Self {
        Self { diagrams }
    }

    /// Draws a module card, returns `true` if its toggle was clicked.
    fn module(&self, ui: &mut egui::Ui, module: &ModuleDescriptor, card: &ExpandableCard) -> bool {
        let mut toggled = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(&module.title);
                toggled = ui.link(toggle_hint(card.state())).clicked();
            });

            for line in &module.summary {
                ui.label(format!("• {line}"));
            }

            if !module.external_links.is_empty() {
                ui.horizontal(|ui| {
                    for link in &module.external_links {
                        ui.hyperlink_to(&link.label, &link.url);
                    }
                });
            }

            if let Some(diagram) = card.visible_diagram() {
                ui.add_space(8.0);
                ui.add(self.diagrams.image(diagram).max_width(ui.available_width()));
            }
        });

        toggled
    }
}

impl Section for Alu {
    fn name(&self) -> &'static str {
        "ALU"
    }

    fn ui(&mut self, ui: &mut egui::Ui, browser: &mut DocumentBrowser) {
        ui.heading("ALU - Deep Dive");
        ui.label("This section is designed to contain module-level documentation for all ALU components");
        ui.add_space(8.0);

        let mut clicked: Option<CardId> = None;
        for (id, module, card) in browser.alu_cards() {
            if self.module(ui, module, card) {
                clicked = Some(id);
            }
            ui.add_space(6.0);
        }

        if let Some(id) = clicked {
            browser.toggle_card(id);
        }
    }
}
