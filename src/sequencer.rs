use crate::model::{ProgressMap, SessionCursor, Stage, StageId, StudyStep};
use crate::progress::record_stage;
use crate::quiz::QuizSession;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReflectionOutcome {
    Advanced { next_stage: StageId },
    /// Era la última etapa: pasa el control a las declaraciones.
    JourneyComplete,
    Ignored,
}

/// Flujo vídeo → quiz → reflexión de la etapa actual.
///
/// Es dueño de las etapas sorteadas para la jornada y de la sesión de quiz en curso;
/// el progreso persistente vive fuera y se recibe por referencia.
#[derive(Clone, Debug)]
pub struct StageSequencer {
    stages: Vec<Stage>,
    cursor: SessionCursor,
    pending_score: Option<u32>,
    quiz: Option<QuizSession>,
}

impl StageSequencer {
    /// `start_at` puede no existir en el catálogo (dato guardado corrupto);
    /// en ese caso `current_stage()` devuelve `None` y quien llama decide a dónde ir.
    pub fn new(stages: Vec<Stage>, start_at: Option<StageId>) -> Self {
        let first = stages.first().map(|s| s.id).unwrap_or(1);
        Self {
            stages,
            cursor: SessionCursor {
                stage_id: start_at.unwrap_or(first),
                step: StudyStep::Video,
            },
            pending_score: None,
            quiz: None,
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn cursor(&self) -> SessionCursor {
        self.cursor
    }

    pub fn step(&self) -> StudyStep {
        self.cursor.step
    }

    pub fn first_stage_id(&self) -> Option<StageId> {
        self.stages.first().map(|s| s.id)
    }

    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn current_stage(&self) -> Option<&Stage> {
        self.stage(self.cursor.stage_id)
    }

    fn position_of(&self, id: StageId) -> Option<usize> {
        self.stages.iter().position(|s| s.id == id)
    }

    pub fn is_first_stage(&self) -> bool {
        self.position_of(self.cursor.stage_id) == Some(0)
    }

    pub fn is_last_stage(&self) -> bool {
        self.position_of(self.cursor.stage_id)
            .map(|pos| pos + 1 == self.stages.len())
            .unwrap_or(false)
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.quiz.as_mut()
    }

    pub fn pending_score(&self) -> Option<u32> {
        self.pending_score
    }

    /// Entra en una etapa desde el vídeo, descartando cualquier quiz a medias.
    pub fn enter_stage(&mut self, id: StageId) -> bool {
        if self.stage(id).is_none() {
            log::warn!("Etapa {id} inexistente; el cursor no cambia");
            return false;
        }
        self.cursor = SessionCursor {
            stage_id: id,
            step: StudyStep::Video,
        };
        self.pending_score = None;
        self.quiz = None;
        true
    }

    /// Del vídeo al quiz: siempre arranca una sesión nueva (pregunta 0, intento 1).
    pub fn advance_from_video<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.cursor.step != StudyStep::Video {
            return false;
        }
        let Some(stage) = self.current_stage() else {
            return false;
        };
        let questions = stage.questions.clone();
        self.quiz = Some(QuizSession::start(questions, rng));
        self.cursor.step = StudyStep::Quiz;
        true
    }

    /// "Ver el vídeo otra vez": el quiz en curso se pierde.
    pub fn watch_video_again(&mut self) -> bool {
        if self.cursor.step != StudyStep::Quiz {
            return false;
        }
        self.quiz = None;
        self.cursor.step = StudyStep::Video;
        true
    }

    pub fn complete_quiz(&mut self, score: u32) -> bool {
        if self.cursor.step != StudyStep::Quiz {
            log::debug!("complete_quiz fuera del paso de quiz ignorado");
            return false;
        }
        self.pending_score = Some(score);
        self.quiz = None;
        self.cursor.step = StudyStep::Reflection;
        true
    }

    /// Cierra el quiz en curso si ya está completo y pasa su puntuación a la reflexión.
    pub fn finish_quiz(&mut self) -> Option<u32> {
        let score = self
            .quiz
            .as_ref()
            .filter(|q| q.is_complete())
            .map(QuizSession::finalize_score)?;
        self.complete_quiz(score).then_some(score)
    }

    /// Guarda el resultado de la etapa y avanza a la siguiente (o termina la jornada).
    pub fn complete_reflection(&mut self, text: &str, progress: &mut ProgressMap) -> ReflectionOutcome {
        let text = text.trim();
        if self.cursor.step != StudyStep::Reflection || text.is_empty() {
            log::debug!("Reflexión ignorada (paso {:?})", self.cursor.step);
            return ReflectionOutcome::Ignored;
        }
        let Some(score) = self.pending_score.take() else {
            return ReflectionOutcome::Ignored;
        };
        let stage_id = self.cursor.stage_id;
        record_stage(progress, stage_id, score, text);
        log::info!("Etapa {stage_id} completada con {score} puntos");

        let next = self
            .position_of(stage_id)
            .and_then(|pos| self.stages.get(pos + 1))
            .map(|s| s.id);
        match next {
            Some(next_stage) => {
                self.enter_stage(next_stage);
                ReflectionOutcome::Advanced { next_stage }
            }
            None => {
                self.cursor.step = StudyStep::Video;
                ReflectionOutcome::JourneyComplete
            }
        }
    }

    /// Vuelve a la etapa anterior sin tocar el progreso guardado.
    pub fn go_to_previous_stage(&mut self) -> bool {
        let previous = self
            .position_of(self.cursor.stage_id)
            .filter(|&pos| pos > 0)
            .map(|pos| self.stages[pos - 1].id);
        match previous {
            Some(id) => self.enter_stage(id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn stages(count: u32, questions: usize) -> Vec<Stage> {
        (1..=count)
            .map(|id| Stage {
                id,
                title: format!("Etapa {id}"),
                video_url: String::new(),
                reflection: String::new(),
                motivation: String::new(),
                questions: (0..questions)
                    .map(|i| Question {
                        prompt: format!("{id}-{i}"),
                        options: vec!["a".into(), "b".into(), "c".into()],
                        correct: 2,
                        explanation: String::new(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn answer_all_correct(seq: &mut StageSequencer, rng: &mut StdRng) {
        let quiz = seq.quiz_mut().unwrap();
        while !quiz.is_complete() {
            let correct = quiz.current_question().unwrap().correct;
            assert!(quiz.submit_answer(correct, rng).is_correct());
            quiz.next_question(rng);
        }
    }

    #[test]
    fn full_stage_cycle_records_progress_and_advances() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut progress = ProgressMap::new();
        let mut seq = StageSequencer::new(stages(3, 4), None);
        assert_eq!(seq.cursor(), SessionCursor { stage_id: 1, step: StudyStep::Video });

        assert!(seq.advance_from_video(&mut rng));
        answer_all_correct(&mut seq, &mut rng);
        assert_eq!(seq.finish_quiz(), Some(400));
        assert_eq!(seq.step(), StudyStep::Reflection);

        let outcome = seq.complete_reflection("aprendi muito", &mut progress);
        assert_eq!(outcome, ReflectionOutcome::Advanced { next_stage: 2 });
        assert_eq!(progress[&1].score, 400);
        assert_eq!(progress[&1].reflection, "aprendi muito");
        assert!(progress[&1].completed);
        assert_eq!(seq.cursor(), SessionCursor { stage_id: 2, step: StudyStep::Video });
        assert!(seq.quiz().is_none());
    }

    #[test]
    fn last_stage_signals_journey_complete() {
        let mut progress = ProgressMap::new();
        let mut seq = StageSequencer::new(stages(2, 0), Some(2));
        let mut rng = StdRng::seed_from_u64(2);
        assert!(seq.is_last_stage());
        assert!(seq.advance_from_video(&mut rng));
        assert_eq!(seq.finish_quiz(), Some(0));
        assert_eq!(seq.complete_reflection("fim", &mut progress), ReflectionOutcome::JourneyComplete);
        assert_eq!(seq.cursor().stage_id, 2);
        // doble envío: no vuelve a escribir
        assert_eq!(seq.complete_reflection("fim", &mut progress), ReflectionOutcome::Ignored);
        assert_eq!(progress.len(), 1);
    }

    #[test]
    fn reflection_requires_text_and_reflection_step() {
        let mut progress = ProgressMap::new();
        let mut seq = StageSequencer::new(stages(2, 1), None);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(seq.complete_reflection("cedo", &mut progress), ReflectionOutcome::Ignored);
        seq.advance_from_video(&mut rng);
        assert!(seq.complete_quiz(50));
        assert_eq!(seq.complete_reflection("   ", &mut progress), ReflectionOutcome::Ignored);
        assert_eq!(seq.step(), StudyStep::Reflection);
        assert!(progress.is_empty());
        assert_eq!(seq.pending_score(), Some(50));
    }

    #[test]
    fn finish_quiz_waits_for_completion() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut seq = StageSequencer::new(stages(1, 2), None);
        assert_eq!(seq.finish_quiz(), None);
        seq.advance_from_video(&mut rng);
        assert_eq!(seq.finish_quiz(), None);
        assert_eq!(seq.step(), StudyStep::Quiz);
        assert!(seq.complete_quiz(10));
        assert!(!seq.complete_quiz(10));
        assert_eq!(seq.pending_score(), Some(10));
    }

    #[test]
    fn going_back_keeps_progress_and_resets_step() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut progress = ProgressMap::new();
        let mut seq = StageSequencer::new(stages(3, 1), None);
        assert!(!seq.go_to_previous_stage());

        seq.advance_from_video(&mut rng);
        answer_all_correct(&mut seq, &mut rng);
        seq.finish_quiz();
        seq.complete_reflection("uma", &mut progress);
        let snapshot = progress.clone();

        seq.advance_from_video(&mut rng);
        assert!(seq.go_to_previous_stage());
        assert_eq!(seq.cursor(), SessionCursor { stage_id: 1, step: StudyStep::Video });
        assert!(seq.quiz().is_none());
        assert!(seq.enter_stage(2));
        assert_eq!(progress, snapshot);
    }

    #[test]
    fn watching_video_again_discards_quiz() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut seq = StageSequencer::new(stages(1, 3), None);
        seq.advance_from_video(&mut rng);
        let correct = seq.quiz().unwrap().current_question().unwrap().correct;
        seq.quiz_mut().unwrap().submit_answer(correct, &mut rng);
        assert!(seq.watch_video_again());
        assert!(seq.quiz().is_none());
        assert!(!seq.watch_video_again());
        seq.advance_from_video(&mut rng);
        let quiz = seq.quiz().unwrap();
        assert_eq!(quiz.question_index(), 0);
        assert_eq!(quiz.running_score(), 0);
    }

    #[test]
    fn unknown_stage_is_reported_not_entered() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seq = StageSequencer::new(stages(2, 1), Some(9));
        assert!(seq.current_stage().is_none());
        assert!(!seq.advance_from_video(&mut rng));
        assert!(!seq.enter_stage(42));
        assert!(seq.enter_stage(1));
        assert!(seq.current_stage().is_some());
    }
}
