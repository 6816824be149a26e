use crate::JourneyApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::Context;

const STEPS: [(&str, &str); 5] = [
    ("🎬", "Assista a um vídeo de estudo em cada uma das etapas."),
    ("❓", "Responda a um quiz para fixar o aprendizado."),
    ("📖", "Medite em uma reflexão bíblica sobre o tema."),
    ("✍", "Escreva seus pensamentos em um diário de reflexão pessoal."),
    ("🏆", "Conclua a jornada para receber recompensas espirituais incríveis!"),
];

pub fn ui_instructions(app: &mut JourneyApp, ctx: &Context) {
    let mut start = false;
    centered_panel(ctx, 380.0, 560.0, |ui| {
        ui.heading(format!("Como funciona, {}?", app.user_name));
        ui.add_space(6.0);
        ui.label("Bem-vindo(a) à sua jornada para descobrir sua verdadeira identidade em Cristo. Siga os passos abaixo:");
        ui.add_space(12.0);
        for (icon, text) in STEPS {
            ui.horizontal_wrapped(|ui| {
                ui.label(icon);
                ui.label(text);
            });
            ui.add_space(4.0);
        }
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            start = big_button(ui, "Vamos começar!", 260.0, true);
        });
    });
    if start {
        app.start_study();
    }
}
