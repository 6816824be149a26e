mod helpers;
pub mod layout;
pub mod views;

use crate::app::JourneyApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for JourneyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PRESENTACIÓN: avanza sola tras unos segundos
        if self.screen == Screen::Splash {
            let dt = ctx.input(|i| i.stable_dt);
            self.tick_splash(dt);
            ctx.request_repaint();
        }

        // BARRA SUPERIOR CON PUNTUACIÓN (durante el estudio y después)
        if !matches!(self.screen, Screen::Splash | Screen::Welcome) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por pantalla a las funciones en views
        match self.screen {
            Screen::Splash => views::splash::ui_splash(self, ctx),
            Screen::Welcome => views::welcome::ui_welcome(self, ctx),
            Screen::MusicSetup => views::music_setup::ui_music_setup(self, ctx),
            Screen::Instructions => views::instructions::ui_instructions(self, ctx),
            Screen::Study => views::study::ui_study(self, ctx),
            Screen::Declaration => views::declaration::ui_declaration(self, ctx),
            Screen::Congratulations => views::congratulations::ui_congratulations(self, ctx),
            Screen::Rewards => views::rewards::ui_rewards(self, ctx),
            Screen::Final => views::final_screen::ui_final(self, ctx),
            Screen::CommunityWall => views::community::ui_community(self, ctx),
            Screen::ShareReport => views::report::ui_share_report(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.persist();
    }
}
