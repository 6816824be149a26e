use crate::JourneyApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, TextEdit};

pub fn ui_welcome(app: &mut JourneyApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Identidade em Cristo").size(30.0).strong());
            ui.label("Quem sou eu aos olhos de Deus?");
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let response = ui.add(
                TextEdit::singleline(&mut app.drafts.name)
                    .hint_text("Digite seu nome")
                    .desired_width(btn_w),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(12.0);

            let can_start = !app.drafts.name.trim().is_empty();
            if big_button(ui, "Começar Jornada", btn_w, can_start) || (enter && can_start) {
                app.submit_name();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
