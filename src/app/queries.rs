use super::*;
use crate::model::Stage;
use crate::progress::{completed_count, completion_ratio, is_stage_completed, total_score};

impl JourneyApp {
    pub fn total_score(&self) -> u32 {
        total_score(&self.progress)
    }

    pub fn completion_ratio(&self) -> f32 {
        completion_ratio(&self.progress, self.sequencer.stage_count())
    }

    pub fn completed_stages(&self) -> usize {
        completed_count(&self.progress)
    }

    pub fn is_stage_completed(&self, id: StageId) -> bool {
        is_stage_completed(&self.progress, id)
    }

    pub fn current_stage(&self) -> Option<&Stage> {
        self.sequencer.current_stage()
    }

    pub fn current_step(&self) -> StudyStep {
        self.sequencer.step()
    }

    pub fn can_go_back(&self) -> bool {
        self.screen == Screen::Study && !self.sequencer.is_first_stage()
    }

    pub fn has_saved_user(&self) -> bool {
        !self.user_name.trim().is_empty()
    }
}
