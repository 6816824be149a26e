use crate::JourneyApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_final(app: &mut JourneyApp, ctx: &Context) {
    let (mut community, mut report, mut restart) = (false, false, false);
    centered_panel(ctx, 300.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Jornada concluída");
            ui.add_space(8.0);
            ui.label(format!(
                "Parabéns, {}! Continue vivendo na liberdade e no propósito da sua nova identidade em Cristo. Que a paz de Deus te guie sempre!",
                app.user_name
            ));
            ui.add_space(20.0);
            let w = 300.0;
            community = big_button(ui, "Visitar Mural da Comunidade", w, true);
            ui.add_space(6.0);
            report = big_button(ui, "Compartilhar relatório", w, true);
            ui.add_space(6.0);
            restart = big_button(ui, "Refazer Jornada", w, true);
        });
    });

    if community {
        app.open_community();
    } else if report {
        app.open_share_report();
    } else if restart {
        app.confirm_reset = true;
    }
}
