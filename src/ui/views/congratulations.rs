use crate::JourneyApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_congratulations(app: &mut JourneyApp, ctx: &Context) {
    let mut next = false;
    centered_panel(ctx, 260.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(format!("Parabéns, {}!", app.user_name)).size(28.0).strong());
            ui.add_space(8.0);
            ui.label("Você completou a jornada \"Identidade em Cristo\"!");
            ui.add_space(16.0);
            ui.label(RichText::new(format!("Pontuação total: {}", app.total_score())).size(22.0));
            ui.add_space(20.0);
            next = big_button(ui, "Receber recompensas", 260.0, true);
        });
    });
    if next {
        app.continue_to_rewards();
    }
}
