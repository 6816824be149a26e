use super::*;

impl JourneyApp {
    /// Cambia de pantalla y vuelve el scroll arriba. Salir del estudio corta la música.
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen == Screen::Study && screen != Screen::Study {
            self.effects.stop_background_music();
        }
        log::debug!("Pantalla {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.scroll_generation += 1;
        self.message.clear();
    }

    /// Pantalla inicial tras la presentación: estudio si ya hay nombre guardado.
    pub fn bootstrap_screen(&self) -> Screen {
        if self.has_saved_user() {
            Screen::Study
        } else {
            Screen::Welcome
        }
    }

    /// Avanza el temporizador de la presentación. Devuelve `true` cuando la deja atrás.
    pub fn tick_splash(&mut self, dt: f32) -> bool {
        if self.screen != Screen::Splash {
            return false;
        }
        self.splash_elapsed += dt.max(0.0);
        if self.splash_elapsed >= self.config.splash_seconds {
            self.finish_splash();
            return true;
        }
        false
    }

    pub fn finish_splash(&mut self) {
        if self.screen != Screen::Splash {
            return;
        }
        match self.bootstrap_screen() {
            Screen::Study => self.open_study(),
            other => self.navigate_to(other),
        }
    }

    /// Bienvenida: guarda el nombre (no vacío) y pasa a elegir la música.
    pub fn submit_name(&mut self) -> bool {
        let name = self.drafts.name.trim().to_string();
        if name.is_empty() {
            self.message = "Digite seu nome para começar.".into();
            return false;
        }
        self.effects.play(Sound::Click);
        self.user_name = name;
        self.persist();
        self.navigate_to(Screen::MusicSetup);
        true
    }

    /// Guarda las pistas elegidas, una por etapa; los huecos vacíos se conservan
    /// para que cada etapa mantenga su posición.
    pub fn save_music_setup(&mut self) {
        let tracks: Vec<String> = self.drafts.bgm_tracks.iter().map(|t| t.trim().to_string()).collect();
        self.bgm_tracks = if tracks.iter().all(|t| t.is_empty()) {
            Vec::new()
        } else {
            tracks
        };
        log::info!(
            "{} pistas de música configuradas",
            self.bgm_tracks.iter().filter(|t| !t.is_empty()).count()
        );
        self.effects.play(Sound::Click);
        self.persist();
        self.navigate_to(Screen::Instructions);
    }

    /// Saltar deja la música por defecto en todas las etapas.
    pub fn skip_music_setup(&mut self) {
        self.bgm_tracks.clear();
        self.drafts.bgm_tracks.clear();
        self.effects.play(Sound::Click);
        self.persist();
        self.navigate_to(Screen::Instructions);
    }

    pub fn start_study(&mut self) {
        self.effects.play(Sound::Click);
        self.open_study();
    }

    /// Entra en la etapa actual desde el vídeo. Si la etapa guardada ya no existe,
    /// vuelve al primer paso de la jornada y a la bienvenida.
    pub fn open_study(&mut self) {
        let stage_id = self.sequencer.cursor().stage_id;
        if self.sequencer.enter_stage(stage_id) {
            self.navigate_to(Screen::Study);
            return;
        }
        log::warn!("Etapa guardada {stage_id} no existe; volviendo a la bienvenida");
        if let Some(first) = self.sequencer.first_stage_id() {
            self.sequencer.enter_stage(first);
        }
        self.persist();
        self.navigate_to(Screen::Welcome);
    }

    /// Botón "Voltar Etapa": no toca el progreso guardado.
    pub fn go_to_previous_stage(&mut self) -> bool {
        if self.screen != Screen::Study || !self.sequencer.go_to_previous_stage() {
            return false;
        }
        self.effects.stop_background_music();
        self.effects.play(Sound::Click);
        self.drafts.reflection.clear();
        self.scroll_generation += 1;
        self.persist();
        true
    }

    pub fn open_community(&mut self) {
        self.effects.play(Sound::Click);
        self.navigate_to(Screen::CommunityWall);
    }

    pub fn open_share_report(&mut self) {
        self.effects.play(Sound::Click);
        self.navigate_to(Screen::ShareReport);
    }

    pub fn back_to_final(&mut self) {
        self.navigate_to(Screen::Final);
    }
}
