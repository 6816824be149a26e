use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type StageId = u32;

/// Progreso por etapa: sólo existen claves de etapas completadas al menos una vez.
pub type ProgressMap = BTreeMap<StageId, StageProgress>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize, // índice dentro de `options`
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Al menos dos opciones y un índice correcto dentro de rango.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.correct < self.options.len()
    }

    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Etapa ya construida para la sesión; las preguntas quedan fijas hasta reiniciar la jornada.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub id: StageId,
    pub title: String,
    pub video_url: String,
    pub reflection: String,
    pub motivation: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StageProgress {
    pub score: u32,
    pub reflection: String,
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StudyStep {
    #[default]
    Video,
    Quiz,
    Reflection,
}

impl StudyStep {
    pub const ALL: [StudyStep; 3] = [StudyStep::Video, StudyStep::Quiz, StudyStep::Reflection];

    pub fn label(self) -> &'static str {
        match self {
            StudyStep::Video => "Vídeo",
            StudyStep::Quiz => "Quiz",
            StudyStep::Reflection => "Reflexão",
        }
    }

    pub fn position(self) -> usize {
        match self {
            StudyStep::Video => 0,
            StudyStep::Quiz => 1,
            StudyStep::Reflection => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCursor {
    pub stage_id: StageId,
    pub step: StudyStep,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    Splash,
    #[default]
    Welcome,
    MusicSetup,
    Instructions,
    Study,
    Declaration,
    Congratulations,
    Rewards,
    Final,
    CommunityWall,
    ShareReport,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sex {
    #[default]
    Masculino,
    Feminino,
}
