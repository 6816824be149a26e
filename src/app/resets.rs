use super::*;

impl JourneyApp {
    /// Empieza la jornada de nuevo: borra progreso, identidad y registro guardado,
    /// vuelve a sortear las preguntas y lleva a la bienvenida. Repetirlo no cambia nada más.
    pub fn reset_journey(&mut self) {
        // 1) estado de la jornada
        self.progress.clear();
        let stages = build_stages(&self.content, self.config.questions_per_stage, &mut self.rng);
        self.sequencer = StageSequencer::new(stages, None);
        self.declared.clear();

        // 2) identidad y preferencias
        self.user_name.clear();
        self.birth_date.clear();
        self.photo = None;
        self.sex = Sex::default();
        self.bgm_tracks.clear();
        self.drafts = Drafts::default();

        // 3) mural de ejemplo
        self.community = CommunityFeed::new(self.content.community_posts.clone());
        self.feed_filter = FeedFilter::default();
        self.feed_sort = FeedSort::default();

        // 4) almacenamiento y pantalla
        store::clear(self.store.as_mut());
        self.confirm_reset = false;
        self.effects.stop_background_music();
        log::info!("Jornada reiniciada");
        self.navigate_to(Screen::Welcome);
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Refazer jornada")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Tem certeza? Todo o seu progresso será apagado.");
                ui.horizontal(|ui| {
                    if ui.button("Sim, recomeçar").clicked() {
                        self.reset_journey();
                    }
                    if ui.button("Não").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
