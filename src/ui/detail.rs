// src/ui/detail.rs
use eframe::egui;

use super::UiAction;
use crate::config::BreweryRecord;
use crate::state::{DetailState, DetailStatus};
use crate::utils::or_dash;

pub fn show_detail_view(ui: &mut egui::Ui, detail: Option<&DetailState>, actions: &mut Vec<UiAction>) {
    if ui.button("⬅ Back to list").clicked() {
        actions.push(UiAction::Back);
    }
    ui.add_space(8.0);

    let Some(detail) = detail else {
        ui.label("No brewery selected");
        return;
    };

    match detail.status() {
        DetailStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        DetailStatus::Failed(message) => {
            ui.group(|ui| {
                ui.heading("Could not load brewery");
                ui.label(egui::RichText::new(message).color(egui::Color32::RED));
                ui.small(format!("id: {}", detail.id()));
                ui.horizontal(|ui| {
                    if ui.button("⟳ Retry").clicked() {
                        actions.push(UiAction::RetryDetail);
                    }
                    if ui.button("Back").clicked() {
                        actions.push(UiAction::Back);
                    }
                });
            });
        }
        DetailStatus::Loaded(brewery) => show_brewery(ui, brewery),
    }
}

fn show_brewery(ui: &mut egui::Ui, brewery: &BreweryRecord) {
    ui.heading(brewery.display_name());
    ui.add_space(8.0);

    egui::Grid::new("brewery_detail_grid")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            let rows = [
                ("Type", &brewery.brewery_type),
                ("Street", &brewery.street),
                ("City", &brewery.city),
                ("State", &brewery.state),
                ("Postal Code", &brewery.postal_code),
                ("Country", &brewery.country),
                ("Phone", &brewery.phone),
            ];
            for (label, value) in rows {
                ui.strong(label);
                ui.label(or_dash(value.as_deref()));
                ui.end_row();
            }

            ui.strong("Website");
            match brewery.website_url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => {
                    ui.hyperlink_to(url, url);
                }
                None => {
                    ui.label(or_dash(None));
                }
            }
            ui.end_row();
        });
}
