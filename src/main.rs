mod settings;

use std::sync::Arc;

use reference::{CatalogError, ReferenceData};
use ui::{app::App, diagrams::DiagramResolver};

use crate::settings::Settings;

fn load(settings: &Settings) -> Result<ReferenceData, CatalogError> {
    match &settings.catalog {
        Some(path) => {
            tracing::info!("loading reference data from {}", path.display());
            ReferenceData::from_path(path)
        }
        None => ReferenceData::bundled(),
    }
}

fn main() -> eframe::Result<()> {
    let settings = Settings::from_args(std::env::args().skip(1));
    let guard = logger::init_logger(settings.log_kind);

    tracing::info!("isadoc v{}", env!("CARGO_PKG_VERSION"));
    for arg in &settings.ignored {
        tracing::warn!("ignoring argument {arg:?}");
    }

    let data = match load(&settings) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("can't load reference data: {e}");
            eprintln!("can't load reference data: {e}");
            drop(guard);
            std::process::exit(2);
        }
    };

    tracing::info!(
        instructions = data.catalog().len(),
        alu_modules = data.alu_modules().len(),
        branch_notes = data.branch_prediction().len(),
        "reference data loaded"
    );

    let title = data.title().to_owned();
    let data = Arc::new(data);
    let diagrams = DiagramResolver::new(&settings.assets_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    tracing::info!("starting window");
    let result = eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, data, diagrams)))),
    );

    drop(guard);
    result
}
