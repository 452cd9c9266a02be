use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::chart::{PieChart, ScatterChart};
use crate::color::{generate_palette, ColorMap};

const ARC_STEPS_PER_TURN: usize = 64;

// ---------------------------------------------------------------------------
// Outcome pie (central panel, top)
// ---------------------------------------------------------------------------

/// Render the outcome pie chart.
pub fn pie_chart(ui: &mut Ui, pie: &PieChart, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&pie.title);
    });

    if pie.total() == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this selection.");
        });
        return;
    }

    let total = pie.total() as f64;
    let palette = generate_palette(pie.labels.len());

    Plot::new("outcome_pie")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for ((label, &value), color) in
                pie.labels.iter().zip(pie.values.iter()).zip(palette)
            {
                let fraction = value as f64 / total;
                let wedge = Polygon::new(PlotPoints::from(wedge_points(start, fraction)))
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, color))
                    .name(format!("{label} ({value})"));
                plot_ui.polygon(wedge);
                start += fraction;
            }
        });
}

/// Vertices of a unit-circle wedge: the centre plus an arc from `start` to
/// `start + fraction`, both in turns measured clockwise from 12 o'clock.
fn wedge_points(start: f64, fraction: f64) -> Vec<[f64; 2]> {
    let steps = ((fraction * ARC_STEPS_PER_TURN as f64).ceil() as usize).max(2);
    let mut points = vec![[0.0, 0.0]];
    for i in 0..=steps {
        let turn = start + fraction * (i as f64 / steps as f64);
        let angle = FRAC_PI_2 - TAU * turn;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Payload scatter (central panel, bottom)
// ---------------------------------------------------------------------------

/// Render the payload / outcome scatter, one series per booster category.
pub fn scatter_chart(ui: &mut Ui, chart: &ScatterChart, colors: &ColorMap, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&chart.title);
    });

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(&chart.x_label)
        .y_axis_label(&chart.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.category)
                    .color(colors.color_for(&series.category))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}
