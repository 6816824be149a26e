// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, 40.0)))
        .clicked()
}

/// Botón de opción del quiz. Las opciones ya falladas se pintan tachadas y deshabilitadas;
/// una vez resuelta la pregunta, la correcta se resalta en verde.
pub fn option_button(ui: &mut Ui, text: &str, width: f32, enabled: bool, selected: bool, tried_wrong: bool, is_correct: bool) -> bool {
    let mut label = RichText::new(text);
    if tried_wrong {
        label = label.strikethrough().color(Color32::from_rgb(200, 80, 80));
    } else if is_correct {
        label = label.strong().color(Color32::from_rgb(80, 200, 120));
    }
    let button = Button::new(label)
        .selected(selected)
        .min_size(Vec2::new(width, 36.0));
    ui.add_enabled(enabled, button).clicked()
}

/// Círculo con las iniciales del autor, al estilo avatar.
pub fn avatar(ui: &mut Ui, initials: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 16.0, Color32::from_rgb(40, 120, 180));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(13.0),
        Color32::WHITE,
    );
}
