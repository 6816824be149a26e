use super::*;
use crate::quiz::SubmitOutcome;

impl JourneyApp {
    /// "Já assisti": arranca el quiz de la etapa y su música de fondo.
    pub fn begin_quiz(&mut self) -> bool {
        if !self.sequencer.advance_from_video(&mut self.rng) {
            return false;
        }
        self.effects.play(Sound::Click);
        self.scroll_generation += 1;
        // etapa sin preguntas: directo a la reflexión
        if self.sequencer.finish_quiz().is_some() {
            self.drafts.reflection.clear();
            return true;
        }
        self.start_stage_music();
        true
    }

    fn start_stage_music(&mut self) {
        let stage_id = self.sequencer.cursor().stage_id;
        let index = self
            .sequencer
            .stages()
            .iter()
            .position(|s| s.id == stage_id)
            .unwrap_or(0);
        if let Some(track) = track_for_stage(&self.bgm_tracks, &self.config.bgm_tracks, index) {
            self.effects.start_background_music(track);
        }
    }

    /// Vuelve al vídeo; el quiz en curso se descarta.
    pub fn watch_video_again(&mut self) -> bool {
        if !self.sequencer.watch_video_again() {
            return false;
        }
        self.effects.stop_background_music();
        self.effects.play(Sound::Click);
        true
    }

    pub fn select_option(&mut self, option: usize) -> bool {
        let Some(quiz) = self.sequencer.quiz_mut() else {
            return false;
        };
        let changed = quiz.select_option(option);
        if changed {
            self.effects.play(Sound::Click);
        }
        changed
    }

    /// Envía la opción marcada. Un segundo envío sobre una pregunta resuelta no hace nada.
    pub fn submit_answer(&mut self) -> SubmitOutcome {
        let Some(quiz) = self.sequencer.quiz_mut() else {
            return SubmitOutcome::Ignored;
        };
        let outcome = quiz.submit_selected(&mut self.rng);
        match outcome {
            SubmitOutcome::Correct { points } => {
                log::debug!("Acerto: +{points}");
                self.effects.play(Sound::Correct);
                self.effects.celebrate();
            }
            SubmitOutcome::Incorrect { .. } | SubmitOutcome::Exhausted => {
                self.effects.play(Sound::Incorrect);
            }
            SubmitOutcome::Ignored => {}
        }
        outcome
    }

    /// Pasa a la siguiente pregunta; tras la última, lleva la puntuación a la reflexión.
    pub fn next_question(&mut self) -> bool {
        let Some(quiz) = self.sequencer.quiz_mut() else {
            return false;
        };
        if !quiz.next_question(&mut self.rng) {
            return false;
        }
        self.effects.play(Sound::Click);
        if let Some(score) = self.sequencer.finish_quiz() {
            log::info!("Quiz da etapa {} terminado: {score} pontos", self.sequencer.cursor().stage_id);
            self.effects.stop_background_music();
            self.drafts.reflection.clear();
        }
        self.scroll_generation += 1;
        true
    }
}
