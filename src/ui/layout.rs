use crate::JourneyApp;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut JourneyApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(format!("👤 {}", app.user_name));
            ui.separator();
            ui.label(format!("⭐ {} pontos", app.total_score()));
            ui.separator();
            ui.label(format!(
                "{}/{} etapas",
                app.completed_stages(),
                app.sequencer().stage_count()
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Refazer jornada").clicked() {
                    app.confirm_reset = true;
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo escuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical. `generation` identifica el scroll: al cambiar,
/// la vista vuelve a empezar arriba.
pub fn scroll_panel(ctx: &Context, generation: u64, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt(("screen_scroll", generation))
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui);
                        });
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
