pub mod alu;
pub mod app;
pub mod architecture;
pub mod branch_prediction;
pub mod card;
pub mod diagrams;
pub mod isa;
pub mod ui_traits;
