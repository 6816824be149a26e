use crate::model::Question;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// Tras el cuarto fallo la pregunta se da por agotada y se muestra la respuesta.
pub const MAX_ATTEMPTS: u32 = 4;

/// Puntos por acertar en el intento `attempt` (1-based).
pub fn points_for_attempt(attempt: u32) -> u32 {
    match attempt {
        0 | 1 => 100,
        2 => 75,
        3 => 50,
        _ => 25,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered { attempt: u32 },
    ResolvedCorrect { attempt: u32 },
    ResolvedExhausted,
}

impl QuestionState {
    pub fn is_resolved(self) -> bool {
        !matches!(self, QuestionState::Unanswered { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct { points: u32 },
    Incorrect { next_attempt: u32 },
    Exhausted,
    /// Envío inválido (sin selección, pregunta ya resuelta, opción descartada...): no cambia nada.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, SubmitOutcome::Correct { .. })
    }
}

/// Texto que se enseña una vez resuelta la pregunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback<'a> {
    Correct { explanation: &'a str },
    Exhausted { correct_answer: &'a str },
}

/// Una opción tal y como se pinta, en el orden barajado actual.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSlot<'a> {
    pub index: usize, // índice original dentro de `Question::options`
    pub text: &'a str,
    pub enabled: bool,
    pub selected: bool,
    pub tried_wrong: bool,
    pub is_correct: bool, // sólo `true` cuando la pregunta ya está resuelta
}

/// Sesión de quiz de una etapa. Las preguntas se presentan en orden, sin saltos.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    state: QuestionState,
    selected: Option<usize>,
    tried_wrong: BTreeSet<usize>,
    display_order: Vec<usize>,
    awarded: Vec<u32>,
    finished: bool,
}

impl QuizSession {
    /// Empieza siempre en la pregunta 0, intento 1. Sin preguntas, la sesión nace completa.
    pub fn start<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Self {
        let finished = questions.is_empty();
        let mut session = Self {
            questions,
            index: 0,
            state: QuestionState::Unanswered { attempt: 1 },
            selected: None,
            tried_wrong: BTreeSet::new(),
            display_order: Vec::new(),
            awarded: Vec::new(),
            finished,
        };
        session.shuffle_options(rng);
        session
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    pub fn question_index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn state(&self) -> QuestionState {
        self.state
    }

    pub fn attempt(&self) -> u32 {
        match self.state {
            QuestionState::Unanswered { attempt } | QuestionState::ResolvedCorrect { attempt } => {
                attempt
            }
            QuestionState::ResolvedExhausted => MAX_ATTEMPTS,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn tried_wrong(&self) -> &BTreeSet<usize> {
        &self.tried_wrong
    }

    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.finished
    }

    /// Puntos concedidos por cada pregunta ya resuelta, en orden.
    pub fn awarded_points(&self) -> &[u32] {
        &self.awarded
    }

    pub fn running_score(&self) -> u32 {
        self.awarded.iter().sum()
    }

    pub fn finalize_score(&self) -> u32 {
        self.running_score()
    }

    fn is_selectable(&self, option: usize) -> bool {
        let in_range = self
            .current_question()
            .map(|q| option < q.options.len())
            .unwrap_or(false);
        in_range && !self.state.is_resolved() && !self.tried_wrong.contains(&option)
    }

    /// Marca una opción. No se puede elegir una opción ya fallada ni cambiar tras resolver.
    pub fn select_option(&mut self, option: usize) -> bool {
        if !self.is_selectable(option) {
            return false;
        }
        self.selected = Some(option);
        true
    }

    pub fn submit_selected<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SubmitOutcome {
        match self.selected {
            Some(option) => self.submit_answer(option, rng),
            None => {
                log::debug!("Envío sin opción seleccionada ignorado");
                SubmitOutcome::Ignored
            }
        }
    }

    pub fn submit_answer<R: Rng + ?Sized>(&mut self, option: usize, rng: &mut R) -> SubmitOutcome {
        let QuestionState::Unanswered { attempt } = self.state else {
            log::debug!("Pregunta {} ya resuelta: envío ignorado", self.index + 1);
            return SubmitOutcome::Ignored;
        };
        if !self.is_selectable(option) {
            log::debug!("Opción {option} no seleccionable en la pregunta {}", self.index + 1);
            return SubmitOutcome::Ignored;
        }
        let correct = match self.current_question() {
            Some(q) => q.correct,
            None => return SubmitOutcome::Ignored,
        };

        if option == correct {
            let points = points_for_attempt(attempt);
            self.awarded.push(points);
            self.state = QuestionState::ResolvedCorrect { attempt };
            self.selected = Some(option);
            return SubmitOutcome::Correct { points };
        }

        self.tried_wrong.insert(option);
        self.selected = None;
        if attempt >= MAX_ATTEMPTS {
            self.awarded.push(0);
            self.state = QuestionState::ResolvedExhausted;
            SubmitOutcome::Exhausted
        } else {
            self.state = QuestionState::Unanswered { attempt: attempt + 1 };
            self.shuffle_options(rng);
            SubmitOutcome::Incorrect { next_attempt: attempt + 1 }
        }
    }

    /// Avanza tras resolver la pregunta actual. Pasada la última, el quiz queda completo.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.finished || !self.state.is_resolved() {
            return false;
        }
        if self.is_last_question() {
            self.finished = true;
            return true;
        }
        self.index += 1;
        self.state = QuestionState::Unanswered { attempt: 1 };
        self.selected = None;
        self.tried_wrong.clear();
        self.shuffle_options(rng);
        true
    }

    /// Nueva permutación de las opciones; las falladas siguen deshabilitadas.
    pub fn shuffle_options<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.current_question().map(|q| q.options.len()).unwrap_or(0);
        self.display_order = (0..n).collect();
        self.display_order.shuffle(rng);
    }

    pub fn option_slots(&self) -> Vec<OptionSlot<'_>> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        let resolved = self.state.is_resolved();
        self.display_order
            .iter()
            .filter_map(|&index| {
                let text = question.options.get(index)?;
                let tried_wrong = self.tried_wrong.contains(&index);
                Some(OptionSlot {
                    index,
                    text,
                    enabled: !resolved && !tried_wrong,
                    selected: self.selected == Some(index),
                    tried_wrong,
                    is_correct: resolved && index == question.correct,
                })
            })
            .collect()
    }

    pub fn feedback(&self) -> Option<Feedback<'_>> {
        let question = self.current_question()?;
        match self.state {
            QuestionState::Unanswered { .. } => None,
            QuestionState::ResolvedCorrect { .. } => Some(Feedback::Correct {
                explanation: &question.explanation,
            }),
            QuestionState::ResolvedExhausted => Some(Feedback::Exhausted {
                correct_answer: question.correct_text(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(n_options: usize, correct: usize) -> Question {
        Question {
            prompt: format!("q{n_options}-{correct}"),
            options: (0..n_options).map(|i| format!("op{i}")).collect(),
            correct,
            explanation: "porque sí".into(),
        }
    }

    fn wrong_options(q: &Question) -> Vec<usize> {
        (0..q.options.len()).filter(|&i| i != q.correct).collect()
    }

    #[test]
    fn points_decay_with_attempts() {
        assert_eq!(points_for_attempt(1), 100);
        assert_eq!(points_for_attempt(2), 75);
        assert_eq!(points_for_attempt(3), 50);
        assert_eq!(points_for_attempt(4), 25);
        assert_eq!(points_for_attempt(9), 25);
    }

    #[test]
    fn correct_on_each_attempt_awards_table_points() {
        let mut rng = StdRng::seed_from_u64(3);
        for (wrong_first, expected) in [(0usize, 100u32), (1, 75), (2, 50), (3, 25)] {
            let q = question(5, 2);
            let wrongs = wrong_options(&q);
            let mut quiz = QuizSession::start(vec![q], &mut rng);
            for &w in wrongs.iter().take(wrong_first) {
                assert!(matches!(quiz.submit_answer(w, &mut rng), SubmitOutcome::Incorrect { .. }));
            }
            assert_eq!(quiz.submit_answer(2, &mut rng), SubmitOutcome::Correct { points: expected });
            assert_eq!(quiz.state(), QuestionState::ResolvedCorrect { attempt: wrong_first as u32 + 1 });
            assert!(quiz.next_question(&mut rng));
            assert!(quiz.is_complete());
            assert_eq!(quiz.finalize_score(), expected);
        }
    }

    #[test]
    fn fourth_wrong_attempt_exhausts_with_zero_points() {
        let mut rng = StdRng::seed_from_u64(5);
        let q = question(5, 0);
        let mut quiz = QuizSession::start(vec![q], &mut rng);
        for (i, w) in [1, 2, 3].into_iter().enumerate() {
            assert_eq!(
                quiz.submit_answer(w, &mut rng),
                SubmitOutcome::Incorrect { next_attempt: i as u32 + 2 }
            );
        }
        assert_eq!(quiz.submit_answer(4, &mut rng), SubmitOutcome::Exhausted);
        assert_eq!(quiz.state(), QuestionState::ResolvedExhausted);
        assert_eq!(quiz.awarded_points(), &[0]);
        assert_eq!(quiz.feedback(), Some(Feedback::Exhausted { correct_answer: "op0" }));
        // la respuesta correcta ya no puntúa
        assert_eq!(quiz.submit_answer(0, &mut rng), SubmitOutcome::Ignored);
        assert_eq!(quiz.finalize_score(), 0);
    }

    #[test]
    fn resubmitting_resolved_question_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut quiz = QuizSession::start(vec![question(4, 1), question(4, 3)], &mut rng);
        assert!(quiz.select_option(1));
        assert!(quiz.submit_selected(&mut rng).is_correct());
        let state = quiz.state();
        for option in 0..4 {
            assert_eq!(quiz.submit_answer(option, &mut rng), SubmitOutcome::Ignored);
        }
        assert_eq!(quiz.submit_selected(&mut rng), SubmitOutcome::Ignored);
        assert_eq!(quiz.state(), state);
        assert_eq!(quiz.running_score(), 100);
        assert!(!quiz.select_option(0));
    }

    #[test]
    fn submit_without_selection_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut quiz = QuizSession::start(vec![question(4, 1)], &mut rng);
        assert_eq!(quiz.submit_selected(&mut rng), SubmitOutcome::Ignored);
        assert_eq!(quiz.state(), QuestionState::Unanswered { attempt: 1 });
        assert_eq!(quiz.submit_answer(17, &mut rng), SubmitOutcome::Ignored);
    }

    #[test]
    fn wrong_answer_clears_selection_and_stays_disabled_across_shuffles() {
        let mut rng = StdRng::seed_from_u64(11);
        let q = question(5, 4);
        let mut quiz = QuizSession::start(vec![q], &mut rng);
        assert!(quiz.select_option(0));
        assert!(matches!(quiz.submit_selected(&mut rng), SubmitOutcome::Incorrect { .. }));
        assert_eq!(quiz.selected(), None);
        assert!(!quiz.select_option(0));

        for _ in 0..50 {
            quiz.shuffle_options(&mut rng);
            let slots = quiz.option_slots();
            assert_eq!(slots.len(), 5);
            let slot0 = slots.iter().find(|s| s.index == 0).unwrap();
            assert!(!slot0.enabled && slot0.tried_wrong);
            assert!(slots.iter().any(|s| s.index == 4 && s.enabled));
        }
        assert_eq!(quiz.submit_answer(0, &mut rng), SubmitOutcome::Ignored);
        assert_eq!(quiz.attempt(), 2);
    }

    #[test]
    fn wrong_answer_reshuffles_the_options() {
        let mut rng = StdRng::seed_from_u64(21);
        let q = question(8, 7);
        let mut quiz = QuizSession::start(vec![q], &mut rng);

        for wrong in 0..3 {
            let mut expected: Vec<usize> = (0..8).collect();
            expected.shuffle(&mut rng.clone());
            assert!(matches!(quiz.submit_answer(wrong, &mut rng), SubmitOutcome::Incorrect { .. }));
            assert_eq!(quiz.display_order(), expected.as_slice());
        }

        // el acierto no vuelve a barajar
        let before = quiz.display_order().to_vec();
        assert!(matches!(quiz.submit_answer(7, &mut rng), SubmitOutcome::Correct { points: 25 }));
        assert_eq!(quiz.display_order(), before.as_slice());
    }

    #[test]
    fn display_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(2);
        let quiz = QuizSession::start(vec![question(6, 0)], &mut rng);
        let mut order = quiz.display_order().to_vec();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn next_question_requires_resolution_and_resets_attempt_state() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut quiz = QuizSession::start(vec![question(4, 0), question(4, 1)], &mut rng);
        assert!(!quiz.next_question(&mut rng));
        assert!(matches!(quiz.submit_answer(3, &mut rng), SubmitOutcome::Incorrect { .. }));
        assert!(quiz.submit_answer(0, &mut rng).is_correct());
        assert_eq!(quiz.feedback(), Some(Feedback::Correct { explanation: "porque sí" }));
        assert!(quiz.next_question(&mut rng));
        assert_eq!(quiz.question_index(), 1);
        assert_eq!(quiz.state(), QuestionState::Unanswered { attempt: 1 });
        assert!(quiz.tried_wrong().is_empty());
        assert!(!quiz.is_complete());
        assert!(quiz.submit_answer(1, &mut rng).is_correct());
        assert!(quiz.next_question(&mut rng));
        assert!(quiz.is_complete());
        assert!(!quiz.next_question(&mut rng));
        assert_eq!(quiz.finalize_score(), 175);
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn finalize_score_is_sum_of_awarded_points() {
        let mut rng = StdRng::seed_from_u64(21);
        let questions: Vec<Question> = (0..10).map(|i| question(5, i % 5)).collect();
        let mut quiz = QuizSession::start(questions, &mut rng);
        let mut expected = 0;
        let mut k = 0;
        while !quiz.is_complete() {
            let q = quiz.current_question().unwrap().clone();
            let wrongs = wrong_options(&q);
            let misses = k % 5; // 0..=4 fallos antes de acertar
            let mut outcome = SubmitOutcome::Ignored;
            for &w in wrongs.iter().take(misses) {
                outcome = quiz.submit_answer(w, &mut rng);
            }
            if misses < 4 {
                outcome = quiz.submit_answer(q.correct, &mut rng);
                expected += points_for_attempt(misses as u32 + 1);
            }
            assert!(outcome != SubmitOutcome::Ignored);
            assert!(quiz.state().is_resolved());
            quiz.next_question(&mut rng);
            k += 1;
        }
        assert_eq!(quiz.finalize_score(), expected);
        assert_eq!(quiz.finalize_score(), quiz.awarded_points().iter().sum::<u32>());
        assert_eq!(quiz.awarded_points().len(), 10);
    }

    #[test]
    fn empty_quiz_is_complete_immediately() {
        let mut rng = StdRng::seed_from_u64(0);
        let quiz = QuizSession::start(Vec::new(), &mut rng);
        assert!(quiz.is_complete());
        assert_eq!(quiz.finalize_score(), 0);
        assert!(quiz.option_slots().is_empty());
    }
}
