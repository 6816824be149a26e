use super::*;

impl JourneyApp {
    /// Lista de etapas para la barra de progreso del estudio.
    pub fn stage_infos(&self) -> Vec<StageInfo> {
        let current = self.sequencer.cursor().stage_id;
        self.sequencer
            .stages()
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                let completed = self.is_stage_completed(stage.id);
                StageInfo {
                    id: stage.id,
                    number: i + 1,
                    title: stage.title.clone(),
                    completed,
                    current: stage.id == current,
                    score: self.progress.get(&stage.id).filter(|_| completed).map(|p| p.score),
                }
            })
            .collect()
    }

    /// Paso a paso de la etapa actual: anteriores hechos, el actual activo.
    pub fn stepper(&self) -> Vec<StepperItem> {
        let active = self.sequencer.step().position();
        StudyStep::ALL
            .iter()
            .map(|&step| StepperItem {
                step,
                state: match step.position() {
                    p if p < active => StepState::Done,
                    p if p == active => StepState::Active,
                    _ => StepState::Pending,
                },
            })
            .collect()
    }
}
