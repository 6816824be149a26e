use crate::JourneyApp;
use crate::model::Sex;
use crate::ui::helpers::big_button;
use crate::ui::layout::scroll_panel;
use egui::{Context, Frame, RichText, TextEdit};

pub fn ui_rewards(app: &mut JourneyApp, ctx: &Context) {
    let generation = app.scroll_generation;
    let card = app.identity_card();
    let letter = app.liberation_letter();

    let mut sex = app.sex;
    let (mut identity_changed, mut copy_card, mut copy_letter, mut next) = (false, false, false, false);

    scroll_panel(ctx, generation, 620.0, |ui| {
        ui.heading("Suas Recompensas");
        ui.add_space(10.0);

        // ----------- CARTEIRA DE IDENTIDADE -----------
        ui.label(RichText::new("Carteira de Identidade Espiritual").strong().size(18.0));
        ui.horizontal(|ui| {
            ui.label("Nascimento (AAAA-MM-DD):");
            identity_changed |= ui
                .add(TextEdit::singleline(&mut app.drafts.birth_date).desired_width(120.0))
                .lost_focus();
        });
        ui.horizontal(|ui| {
            ui.label("Foto 3x4:");
            identity_changed |= ui
                .add(TextEdit::singleline(&mut app.drafts.photo).hint_text("caminho da imagem"))
                .lost_focus();
        });
        ui.horizontal(|ui| {
            identity_changed |= ui.radio_value(&mut sex, Sex::Masculino, "Masculino").changed();
            identity_changed |= ui.radio_value(&mut sex, Sex::Feminino, "Feminino").changed();
        });
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.monospace(card.to_text());
        });
        copy_card = ui.button("📋 Copiar identidade").clicked();
        ui.add_space(16.0);

        // ----------- CARTA DE ALFORRIA -----------
        ui.label(RichText::new("Carta de Alforria Espiritual").strong().size(18.0));
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(&letter);
        });
        copy_letter = ui.button("📋 Copiar carta").clicked();
        ui.add_space(20.0);

        if !app.message.is_empty() {
            ui.label(&app.message);
        }
        ui.vertical_centered(|ui| {
            next = big_button(ui, "Continuar", 240.0, true);
        });
    });

    if identity_changed {
        app.commit_identity(sex);
    }
    if copy_card {
        ctx.copy_text(card.to_text());
        app.notify_copy(true);
    }
    if copy_letter {
        ctx.copy_text(letter);
        app.notify_copy(true);
    }
    if next {
        app.continue_to_final();
    }
}
