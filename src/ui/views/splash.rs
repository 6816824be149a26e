use crate::JourneyApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

const SPLASH_TEXTS: [&str; 3] = [
    "A partir de agora você irá descobrir...",
    "Quem é você aos olhos de Deus!",
    "A sua verdadeira identidade.",
];

/// Segundos que se muestra cada frase.
const TEXT_SECONDS: f32 = 3.0;

pub fn ui_splash(app: &mut JourneyApp, ctx: &Context) {
    let idx = ((app.splash_elapsed / TEXT_SECONDS) as usize).min(SPLASH_TEXTS.len() - 1);
    let mut skip = false;

    centered_panel(ctx, 160.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(SPLASH_TEXTS[idx]).size(26.0).strong());
            ui.add_space(24.0);
            if ui.small_button("Pular ⏭").clicked() {
                skip = true;
            }
        });
    });

    if skip {
        app.finish_splash();
    }
}
