use super::*;
use crate::report::{IdentityCard, ReportInput, build_report, liberation_letter};

impl JourneyApp {
    pub fn report_text(&self) -> String {
        build_report(&ReportInput {
            user_name: &self.user_name,
            birth_date: &self.birth_date,
            stages: self.sequencer.stages(),
            progress: &self.progress,
            posts: self.community.posts(),
        })
    }

    pub fn identity_card(&self) -> IdentityCard {
        IdentityCard::issue_today(&self.user_name, &self.birth_date, self.sex)
    }

    pub fn liberation_letter(&self) -> String {
        liberation_letter(&self.user_name)
    }

    /// Resultado de copiar al portapapeles: sólo cambia el sonido y el aviso.
    pub fn notify_copy(&mut self, ok: bool) {
        if ok {
            self.effects.play(Sound::CopySuccess);
            self.message = "Copiado com sucesso!".into();
        } else {
            self.effects.play(Sound::CopyFail);
            self.message = "Falha ao copiar!".into();
        }
    }
}
