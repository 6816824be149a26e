// src/view_models.rs

use crate::model::{StageId, StudyStep};

#[derive(Clone, Debug, PartialEq)]
pub struct StageInfo {
    pub id: StageId,
    pub number: usize, // posición "humana" en el catálogo (1,2,3…)
    pub title: String,
    pub completed: bool,
    pub current: bool,
    pub score: Option<u32>,
}

impl StageInfo {
    pub fn label(&self) -> String {
        match (self.completed, self.score) {
            (true, Some(score)) => format!("Etapa {} ✅ ({} pts)", self.number, score),
            _ if self.current => format!("Etapa {} ▶", self.number),
            _ => format!("Etapa {}", self.number),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Active,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepperItem {
    pub step: StudyStep,
    pub state: StepState,
}

impl StepperItem {
    pub fn label(&self) -> String {
        let mark = match self.state {
            StepState::Done => "✔",
            StepState::Active => "●",
            StepState::Pending => "○",
        };
        format!("{mark} {}", self.step.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_label_reflects_status() {
        let mut info = StageInfo {
            id: 2,
            number: 2,
            title: "Herdeiros".into(),
            completed: true,
            current: false,
            score: Some(750),
        };
        assert_eq!(info.label(), "Etapa 2 ✅ (750 pts)");
        info.completed = false;
        info.score = None;
        info.current = true;
        assert_eq!(info.label(), "Etapa 2 ▶");
    }
}
