use crate::JourneyApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, RichText, Vec2};

pub fn ui_declaration(app: &mut JourneyApp, ctx: &Context) {
    let generation = app.scroll_generation;
    let declarations = app.declarations().to_vec();
    let mut declare: Option<usize> = None;
    let mut proceed = false;

    scroll_panel(ctx, generation, 600.0, |ui| {
        ui.heading("Declarações da Nova Identidade");
        ui.add_space(6.0);
        ui.label("Clique em cada botão para declarar em voz alta a sua nova identidade em Cristo.");
        ui.add_space(12.0);

        let width = ui.available_width();
        for (i, text) in declarations.iter().enumerate() {
            let done = app.declared.contains(&i);
            let label = if done {
                RichText::new(format!("✔ {text}")).strong()
            } else {
                RichText::new(text.as_str())
            };
            let button = Button::new(label)
                .selected(done)
                .min_size(Vec2::new(width, 36.0));
            if ui.add_enabled(!done, button).clicked() {
                declare = Some(i);
            }
            ui.add_space(4.0);
        }

        ui.add_space(12.0);
        ui.label(format!("{}/{} declaradas", app.declared.len(), declarations.len()));
        ui.vertical_centered(|ui| {
            proceed = big_button(ui, "Continuar", 240.0, app.all_declared());
        });
    });

    if let Some(i) = declare {
        app.declare(i);
    }
    if proceed {
        app.finish_declarations();
    }
}
