use crate::model::{ProgressMap, StageId, StageProgress};

/// Suma de las puntuaciones guardadas. Se recalcula en cada lectura.
pub fn total_score(progress: &ProgressMap) -> u32 {
    progress.values().map(|p| p.score).sum()
}

pub fn completed_count(progress: &ProgressMap) -> usize {
    progress.values().filter(|p| p.completed).count()
}

/// Fracción de etapas completadas (0.0 ..= 1.0).
pub fn completion_ratio(progress: &ProgressMap, total_stages: usize) -> f32 {
    if total_stages == 0 {
        return 0.0;
    }
    (completed_count(progress) as f32 / total_stages as f32).min(1.0)
}

pub fn is_stage_completed(progress: &ProgressMap, id: StageId) -> bool {
    progress.get(&id).map(|p| p.completed).unwrap_or(false)
}

/// Registra (o sobrescribe) el resultado de una etapa.
pub fn record_stage(progress: &mut ProgressMap, id: StageId, score: u32, reflection: &str) {
    let previous = progress.insert(
        id,
        StageProgress {
            score,
            reflection: reflection.to_string(),
            completed: true,
        },
    );
    if let Some(prev) = previous {
        log::info!("Etapa {id} repetida: {} -> {} puntos", prev.score, score);
    }
}
