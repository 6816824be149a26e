use crate::JourneyApp;
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Context, TextEdit};

pub fn ui_music_setup(app: &mut JourneyApp, ctx: &Context) {
    // una pista por etapa
    let stage_count = app.sequencer().stage_count();
    if app.drafts.bgm_tracks.len() != stage_count {
        app.drafts.bgm_tracks.resize(stage_count, String::new());
    }
    let titles: Vec<String> = app.sequencer().stages().iter().map(|s| s.title.clone()).collect();
    let generation = app.scroll_generation;
    let mut save = false;
    let mut skip = false;

    scroll_panel(ctx, generation, 560.0, |ui| {
        ui.heading("Personalize a Trilha Sonora");
        ui.add_space(6.0);
        ui.label(format!(
            "Olá, {}! Indique uma música (caminho do arquivo) para o fundo de cada etapa do quiz.",
            app.user_name
        ));
        ui.add_space(12.0);

        let width = ui.available_width();
        for (i, title) in titles.iter().enumerate() {
            ui.label(title);
            ui.add(
                TextEdit::singleline(&mut app.drafts.bgm_tracks[i])
                    .hint_text("musica.mp3")
                    .desired_width(width),
            );
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        (skip, save) = two_button_row(ui, width, "Pular por agora", "Salvar e continuar");
    });

    if save {
        app.save_music_setup();
    } else if skip {
        app.skip_music_setup();
    }
}
