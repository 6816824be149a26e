use super::*;

impl JourneyApp {
    /// Envía la reflexión escrita en el borrador. Con texto vacío no hace nada.
    pub fn submit_reflection(&mut self) -> ReflectionOutcome {
        let text = self.drafts.reflection.clone();
        let outcome = self.sequencer.complete_reflection(&text, &mut self.progress);
        match outcome {
            ReflectionOutcome::Advanced { next_stage } => {
                self.effects.play(Sound::StageComplete);
                self.drafts.reflection.clear();
                self.persist();
                self.scroll_generation += 1;
                log::info!("Avançando para a etapa {next_stage}");
            }
            ReflectionOutcome::JourneyComplete => {
                self.effects.play(Sound::StageComplete);
                self.effects.celebrate();
                self.drafts.reflection.clear();
                self.declared.clear();
                self.persist();
                self.navigate_to(Screen::Declaration);
            }
            ReflectionOutcome::Ignored => {
                if self.sequencer.step() == StudyStep::Reflection {
                    self.message = "Escreva sua reflexão antes de continuar.".into();
                }
            }
        }
        outcome
    }

    /// Marca una declaración como proclamada. Repetir no cuenta dos veces.
    pub fn declare(&mut self, index: usize) -> bool {
        if index >= self.content.declarations.len() || !self.declared.insert(index) {
            return false;
        }
        self.effects.play(Sound::Declare);
        true
    }

    pub fn all_declared(&self) -> bool {
        self.declared.len() == self.content.declarations.len()
    }

    /// Sólo avanza cuando todas las declaraciones se han proclamado.
    pub fn finish_declarations(&mut self) -> bool {
        if !self.all_declared() {
            return false;
        }
        self.effects.celebrate();
        self.navigate_to(Screen::Congratulations);
        true
    }

    pub fn continue_to_rewards(&mut self) {
        self.effects.play(Sound::Click);
        self.navigate_to(Screen::Rewards);
    }

    pub fn continue_to_final(&mut self) {
        self.commit_identity(self.sex);
        self.effects.play(Sound::Click);
        self.navigate_to(Screen::Final);
    }
}
