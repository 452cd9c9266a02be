/// UI layer: egui panels and plot rendering.

pub mod panels;
pub mod plot;
