use eframe::egui::{self, RichText};
use std::time::Instant;

use crate::notification_handler::NotificationKind;
use crate::ViewerApp;

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 180, 80);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 120, 120);
const PREVIEW_LIMIT: usize = 20_000;

impl ViewerApp {
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("graph_search_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Graph search");
                ui.add_space(8.0);

                ui.label("Module");
                ui.text_edit_singleline(&mut self.draft.module);
                ui.label("Op name");
                ui.text_edit_singleline(&mut self.draft.op_name);

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label("Graph width");
                    ui.add(egui::DragValue::new(&mut self.draft.graph_width).clamp_range(1..=200));
                });
                ui.checkbox(&mut self.draft.show_metadata, "Show metadata");
                ui.checkbox(&mut self.draft.merge_fusion, "Merge fusion");

                ui.add_space(8.0);
                if ui.button("Search").clicked() {
                    self.controller.submit(self.draft.to_update(), Instant::now());
                }

                ui.separator();
                let identity = self.controller.identity();
                ui.label(format!("Run: {}", identity.run));
                ui.label(format!("Tag: {}", identity.tag));
                ui.label(format!("Host: {}", identity.host));
                if !self.active_tool.is_empty() {
                    ui.label(
                        RichText::new(format!("Active tool: {}", self.active_tool))
                            .color(egui::Color32::from_gray(160)),
                    );
                }
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            for warning in &self.controller.diagnostics().warnings {
                ui.label(RichText::new(warning).color(WARNING_COLOR));
            }
            for error in &self.controller.diagnostics().errors {
                ui.label(RichText::new(error).color(ERROR_COLOR));
            }
            for info in &self.controller.diagnostics().info {
                ui.label(info);
            }

            if self.controller.loading_graph_html() {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new().size(24.0));
                });
                return;
            }

            if let Some(err) = self.controller.target().fetch_error() {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(err).color(ERROR_COLOR));
                });
                return;
            }

            if let Some(document) = self.controller.target().document() {
                ui.label(format!("Artifact size: {} bytes", document.len()));
                ui.separator();
                let mut preview_len = document.len().min(PREVIEW_LIMIT);
                while !document.is_char_boundary(preview_len) {
                    preview_len -= 1;
                }
                egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                    ui.label(RichText::new(&document[..preview_len]).monospace());
                    if document.len() > PREVIEW_LIMIT {
                        ui.label(
                            RichText::new("… preview truncated")
                                .color(egui::Color32::from_gray(160)),
                        );
                    }
                });
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Pick a module and op name, then search.")
                            .color(egui::Color32::from_gray(180)),
                    );
                });
            }
        });
    }

    pub(crate) fn render_notifications(&mut self, ctx: &egui::Context) {
        let recent = self.notification_handler.recent_notifications();
        if recent.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("viewer_notifications"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                for notification in recent {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        let title = RichText::new(&notification.title).strong();
                        let title = match notification.kind {
                            NotificationKind::Warning => title.color(WARNING_COLOR),
                            NotificationKind::Info => title,
                        };
                        ui.label(title);
                        ui.label(&notification.message);
                    });
                }
            });
    }
}
