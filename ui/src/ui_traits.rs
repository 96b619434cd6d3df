use reference::DocumentBrowser;

/// A block of the document page.
///
/// Sections are stateless renderers: everything a reader can change lives
/// in the [`DocumentBrowser`] they draw, and clicks are fed back into it.
pub trait Section {
    /// `&'static` so it doubles as the id salt of the section's widgets.
    fn name(&self) -> &'static str;

    fn ui(&mut self, ui: &mut egui::Ui, browser: &mut DocumentBrowser);
}
