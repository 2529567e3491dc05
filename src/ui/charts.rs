// src/ui/charts.rs
use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui;

use crate::analysis::{StateCount, TypeCountMap};

const PALETTE: [egui::Color32; 10] = [
    egui::Color32::from_rgb(100, 150, 255),
    egui::Color32::from_rgb(255, 160, 80),
    egui::Color32::from_rgb(100, 200, 100),
    egui::Color32::from_rgb(200, 100, 100),
    egui::Color32::from_rgb(170, 120, 220),
    egui::Color32::from_rgb(140, 100, 80),
    egui::Color32::from_rgb(230, 130, 200),
    egui::Color32::from_rgb(150, 150, 150),
    egui::Color32::from_rgb(200, 200, 90),
    egui::Color32::from_rgb(80, 200, 210),
];

pub fn series_color(index: usize) -> egui::Color32 {
    PALETTE[index % PALETTE.len()]
}

fn type_label(brewery_type: Option<&str>) -> &str {
    match brewery_type {
        Some("") => "(empty)",
        Some(t) => t,
        None => "(none)",
    }
}

/// Bar per brewery type, in the order the types were first seen.
pub fn type_bar_chart(ui: &mut egui::Ui, counts: &TypeCountMap) {
    ui.heading("Breweries by Type");

    if counts.is_empty() {
        ui.label("No data");
        return;
    }

    let plot = egui_plot::Plot::new("type_bar_chart")
        .height(200.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = counts.iter()
            .enumerate()
            .map(|(i, (brewery_type, count))| {
                egui_plot::Bar::new(i as f64, count as f64)
                    .name(type_label(brewery_type))
                    .width(0.6)
                    .fill(series_color(i))
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });

    ui.horizontal_wrapped(|ui| {
        for (i, (brewery_type, count)) in counts.iter().enumerate() {
            legend_entry(ui, series_color(i), &format!("{}: {}", type_label(brewery_type), count));
        }
    });
}

/// Pie of the top states with a legend beside it.
pub fn state_pie_chart(ui: &mut egui::Ui, top_states: &[StateCount]) {
    ui.heading(format!("Top {} States", top_states.len()));

    let total: usize = top_states.iter().map(|s| s.count).sum();
    if total == 0 {
        ui.label("No data");
        return;
    }

    ui.horizontal(|ui| {
        let size = 200.0;
        let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.45;

        let mut start = -FRAC_PI_2;
        for (i, entry) in top_states.iter().enumerate() {
            let sweep = entry.count as f32 / total as f32 * TAU;
            paint_slice(&painter, center, radius, start, sweep, series_color(i));
            start += sweep;
        }

        ui.vertical(|ui| {
            for (i, entry) in top_states.iter().enumerate() {
                let share = entry.count as f32 * 100.0 / total as f32;
                legend_entry(
                    ui,
                    series_color(i),
                    &format!("{}: {} ({:.0}%)", entry.label(), entry.count, share),
                );
            }
        });
    });
}

fn paint_slice(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: egui::Color32,
) {
    const ARC_POINTS: usize = 16;

    // Wedges of at most a quarter turn keep every polygon convex.
    let wedges = ((sweep / FRAC_PI_2).ceil() as usize).max(1);
    for wedge in 0..wedges {
        let from = start + sweep * wedge as f32 / wedges as f32;
        let to = start + sweep * (wedge + 1) as f32 / wedges as f32;

        let mut points = Vec::with_capacity(ARC_POINTS + 2);
        points.push(center);
        for k in 0..=ARC_POINTS {
            let angle = from + (to - from) * k as f32 / ARC_POINTS as f32;
            points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
        }

        painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
    }
}

fn legend_entry(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, color);
        ui.label(text);
    });
}
