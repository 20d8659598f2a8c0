use std::collections::BTreeMap;
use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Painter, Pos2, RichText, Sense, Stroke, Ui, Vec2};
use egui_plot::{Legend, Plot, Points};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Proportion chart (pie)
// ---------------------------------------------------------------------------

/// Render the outcome-breakdown pie with a count/percentage legend.
pub fn breakdown_pie(ui: &mut Ui, state: &AppState) {
    let breakdown = &state.breakdown;
    ui.strong(&breakdown.title);

    let total: u64 = breakdown.slices.iter().map(|s| s.count).sum();
    if breakdown.slices.is_empty() || total == 0 {
        ui.label("No launches match the current selection.");
        return;
    }

    let colors = generate_palette(breakdown.slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let side = ui.available_height().clamp(120.0, 260.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let center = response.rect.center();
        let radius = side * 0.5 - 2.0;

        // Slices start at 12 o'clock and run clockwise, in breakdown order.
        let mut start_angle = -TAU / 4.0;
        for (slice, color) in breakdown.slices.iter().zip(&colors) {
            let sweep = (slice.count as f32 / total as f32) * TAU;
            paint_sector(&painter, center, radius, start_angle, sweep, *color);
            start_angle += sweep;
        }

        ui.vertical(|ui: &mut Ui| {
            for (slice, color) in breakdown.slices.iter().zip(&colors) {
                let share = 100.0 * slice.count as f64 / total as f64;
                ui.label(
                    RichText::new(format!("⏺ {}: {} ({share:.1}%)", slice.label, slice.count))
                        .color(*color),
                );
            }
        });
    });
}

/// Paint one pie sector as a fan of wedges.  egui's tessellator expects
/// convex polygons, so sweeps above a quarter turn are split into chunks.
fn paint_sector(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    color: Color32,
) {
    let mut start = start_angle;
    let mut remaining = sweep;
    while remaining > 0.0 {
        let chunk = remaining.min(TAU / 4.0);
        let steps = ((chunk / 0.05).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = start + chunk * i as f32 / steps as f32;
            points.push(center + radius * Vec2::angled(angle));
        }
        painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
        start += chunk;
        remaining -= chunk;
    }
}

// ---------------------------------------------------------------------------
// Correlation chart (scatter)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter, one point series per booster
/// version category so the plot legend lists the categories.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let view = &state.correlation;
    ui.strong(&view.title);

    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &view.indices {
        let rec = &state.dataset.records[idx];
        by_category
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, f64::from(rec.outcome.class())]);
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload mass (kg)")
        .y_axis_label("Mission outcome")
        .include_y(-0.5)
        .include_y(1.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.color_map.color_for(category))
                        .radius(4.0),
                );
            }
        });
}
