use egui::RichText;
use egui_extras::{Column, TableBuilder};
use reference::{DocumentBrowser, InstructionFormat, InstructionRecord};

use crate::ui_traits::Section;

const COLUMNS: [&str; 6] = [
    "Instruction",
    "Description",
    "Class",
    "Class Specific Opcode",
    "Operands",
    "Example",
];

const FORMAT_ROW_HEIGHT: f32 = 28.0;

/// Instruction formats and the filtered instruction table.
#[derive(Default)]
pub struct Isa {}

impl Isa {
    fn format(ui: &mut egui::Ui, format: &InstructionFormat) {
        ui.label(RichText::new(&format.title).strong());

        let total = ui.available_width();
        let stroke = ui.visuals().widgets.noninteractive.bg_stroke;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for field in &format.fields {
                let cell = egui::Label::new(RichText::new(field.caption()).small());
                let response = ui.add_sized([total * field.fraction(), FORMAT_ROW_HEIGHT], cell);
                ui.painter()
                    .rect_stroke(response.rect, 0.0, stroke, egui::StrokeKind::Inside);
            }
        });
        ui.add_space(8.0);
    }

    fn table(ui: &mut egui::Ui, records: &[&InstructionRecord]) {
        let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(80.0))
            .column(Column::initial(360.0).resizable(true).clip(true))
            .columns(Column::auto().at_least(60.0), 3)
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for title in COLUMNS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, records.len(), |mut row| {
                    let record = records[row.index()];
                    row.col(|ui| {
                        ui.monospace(&record.instruction);
                    });
                    row.col(|ui| {
                        ui.add(egui::Label::new(&record.description).truncate());
                    });
                    row.col(|ui| {
                        ui.label(&record.class_binary);
                    });
                    row.col(|ui| {
                        ui.label(&record.class_spec_opcode);
                    });
                    row.col(|ui| {
                        ui.monospace(&record.operands);
                    });
                    row.col(|ui| {
                        ui.monospace(record.example_text());
                    });
                });
            });
    }
}

impl Section for Isa {
    fn name(&self) -> &'static str {
        "ISA"
    }

    fn ui(&mut self, ui: &mut egui::Ui, browser: &mut DocumentBrowser) {
        ui.heading("Instruction Formats");
        ui.add_space(4.0);
        for format in browser.formats() {
            Self::format(ui, format);
        }

        ui.add_space(12.0);

        let records: Vec<&InstructionRecord> = browser.filtered_records().collect();
        if records.is_empty() && browser.has_query() {
            ui.weak("No instructions match");
            return;
        }

        Self::table(ui, &records);
    }
}
