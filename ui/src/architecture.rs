use reference::{CardId, DocumentBrowser};

use crate::{card::diagram_button, diagrams::DiagramResolver, ui_traits::Section};

/// The high-level CPU diagram shown above every view.
pub struct Architecture {
    diagrams: DiagramResolver,
}

impl Architecture {
    pub const fn new(diagrams: DiagramResolver) -> Self {
        Self { diagrams }
    }
}

impl Section for Architecture {
    fn name(&self) -> &'static str {
        "Architecture"
    }

    fn ui(&mut self, ui: &mut egui::Ui, browser: &mut DocumentBrowser) {
        let Some(card) = browser.card(CardId::Architecture) else {
            return;
        };
        let title = &browser.reference().architecture().title;

        let mut toggled = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toggled = ui.link(diagram_button(card.state())).clicked();
                });
            });

            if let Some(diagram) = card.visible_diagram() {
                ui.add_space(8.0);
                ui.add(self.diagrams.image(diagram).max_width(ui.available_width()));
            }
        });

        if toggled {
            browser.toggle_card(CardId::Architecture);
        }
    }
}
