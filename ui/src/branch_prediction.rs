use reference::DocumentBrowser;

use crate::ui_traits::Section;

/// Branch-prediction design notes, two per row.
#[derive(Default)]
pub struct BranchPrediction {}

impl Section for BranchPrediction {
    fn name(&self) -> &'static str {
        "Branch Prediction"
    }

    fn ui(&mut self, ui: &mut egui::Ui, browser: &mut DocumentBrowser) {
        ui.heading("Branch Prediction");
        ui.label("This section contains detailed information about branch prediction strategies.");
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            for (index, note) in browser.branch_prediction().iter().enumerate() {
                let ui = &mut columns[index % 2];
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.strong(&note.title);
                    for line in &note.summary {
                        ui.label(line);
                    }
                });
                ui.add_space(6.0);
            }
        });
    }
}
