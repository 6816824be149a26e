use crate::JourneyApp;
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Context, TextEdit};

pub fn ui_share_report(app: &mut JourneyApp, ctx: &Context) {
    let generation = app.scroll_generation;
    let mut report = app.report_text();
    let (mut copy, mut back) = (false, false);

    scroll_panel(ctx, generation, 640.0, |ui| {
        ui.heading("Compartilhar Relatório");
        ui.add_space(6.0);
        ui.label("Copie o relatório abaixo e envie para o administrador do estudo pelo meio de sua preferência.");
        ui.add_space(10.0);
        // sólo lectura: el texto se regenera en cada frame
        ui.add(
            TextEdit::multiline(&mut report)
                .desired_rows(18)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );
        ui.add_space(10.0);
        let width = ui.available_width();
        (copy, back) = two_button_row(ui, width, "📋 Copiar relatório", "Voltar");
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });

    if copy {
        ctx.copy_text(report);
        app.notify_copy(true);
    }
    if back {
        app.back_to_final();
    }
}
