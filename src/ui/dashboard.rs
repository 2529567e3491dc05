// src/ui/dashboard.rs
use eframe::egui;

use super::{charts, UiAction};
use crate::state::{DashboardEvent, DashboardState, DashboardSummary, LoadStatus};
use crate::utils::or_dash;

pub fn show_dashboard_view(
    ui: &mut egui::Ui,
    dashboard: &DashboardState,
    top_states: usize,
    actions: &mut Vec<UiAction>,
) {
    let summary = dashboard.summary(top_states);
    let available_size = ui.available_size();

    show_status_banner(ui, dashboard, &summary, actions);

    egui::Grid::new("dashboard_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            // Left panel - controls, counters and the brewery list
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.45);
                ui.set_max_width(available_size.x * 0.45);

                show_controls(ui, dashboard, &summary, actions);
                ui.add_space(8.0);
                show_stats(ui, dashboard, &summary);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                show_brewery_list(ui, &summary, actions);
            });

            // Right panel - charts
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.5);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    charts::type_bar_chart(ui, &summary.type_counts);
                });
                ui.add_space(8.0);
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    charts::state_pie_chart(ui, &summary.top_states);
                });
            });
        });
}

fn show_status_banner(
    ui: &mut egui::Ui,
    dashboard: &DashboardState,
    summary: &DashboardSummary<'_>,
    actions: &mut Vec<UiAction>,
) {
    match dashboard.status() {
        LoadStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading breweries...");
            });
        }
        LoadStatus::Failed(message) => {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("⚠ Could not load breweries: {}", message))
                        .color(egui::Color32::RED),
                );
                if ui.button("⟳ Retry").clicked() {
                    actions.push(UiAction::Refresh);
                }
            });
            if summary.total > 0 {
                ui.label("Showing the last successfully loaded list.");
            }
        }
        LoadStatus::Idle | LoadStatus::Loaded => {}
    }
    ui.add_space(4.0);
}

fn show_controls(
    ui: &mut egui::Ui,
    dashboard: &DashboardState,
    summary: &DashboardSummary<'_>,
    actions: &mut Vec<UiAction>,
) {
    let filter = dashboard.filter();

    ui.horizontal(|ui| {
        let mut search_term = filter.search_term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search_term)
                .hint_text("Search by name...")
                .desired_width(220.0),
        );
        if response.changed() {
            actions.push(UiAction::Dashboard(DashboardEvent::SearchChanged(search_term)));
        }

        let mut filter_type = filter.filter_type.clone();
        let selected_text = if filter_type.is_empty() {
            "All Types".to_string()
        } else {
            filter_type.clone()
        };
        egui::ComboBox::from_id_source("type_filter")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter_type, String::new(), "All Types");
                for brewery_type in &summary.unique_types {
                    ui.selectable_value(&mut filter_type, brewery_type.to_string(), *brewery_type);
                }
            });
        if filter_type != filter.filter_type {
            actions.push(UiAction::Dashboard(DashboardEvent::FilterTypeChanged(filter_type)));
        }
    });
}

fn show_stats(ui: &mut egui::Ui, dashboard: &DashboardState, summary: &DashboardSummary<'_>) {
    ui.horizontal(|ui| {
        ui.label(format!("Total Breweries: {}", summary.total));
        ui.separator();
        ui.label(format!("Filtered: {}", summary.filtered_count()));
        ui.separator();
        ui.label(format!("Types: {}", summary.type_count()));
    });
    if let Some(updated) = dashboard.last_updated() {
        ui.small(format!("Last updated {}", updated.format("%H:%M:%S")));
    }
}

fn show_brewery_list(ui: &mut egui::Ui, summary: &DashboardSummary<'_>, actions: &mut Vec<UiAction>) {
    if summary.filtered.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if summary.total == 0 {
                "No breweries loaded"
            } else {
                "No breweries match the current filters"
            });
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("brewery_list_scroll")
        .show(ui, |ui| {
            for brewery in &summary.filtered {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());

                    let response = ui.selectable_label(
                        false,
                        egui::RichText::new(brewery.display_name()).strong(),
                    );
                    ui.label(brewery.location());
                    ui.label(format!("Type: {}", or_dash(brewery.brewery_type.as_deref())));

                    if response.on_hover_text("Show details").clicked() {
                        actions.push(UiAction::OpenDetail(brewery.id.clone()));
                    }
                });
                ui.add_space(4.0);
            }
        });
}
