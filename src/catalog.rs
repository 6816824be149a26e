use crate::data::ContentTable;
use crate::model::{Question, Stage, StageId};
use rand::Rng;
use rand::seq::SliceRandom;

/// Preguntas por etapa en una jornada normal.
pub const DEFAULT_QUESTIONS_PER_STAGE: usize = 10;

/// Sortea `n` preguntas distintas del banco, sin reemplazo.
/// Si el banco tiene menos de `n`, devuelve todas (en orden aleatorio).
pub fn sample_bank<R: Rng + ?Sized>(bank: &[Question], n: usize, rng: &mut R) -> Vec<Question> {
    bank.choose_multiple(rng, n).cloned().collect()
}

/// Sorteo para una etapa concreta del catálogo; una etapa desconocida no tiene preguntas.
pub fn draw_questions<R: Rng + ?Sized>(
    table: &ContentTable,
    stage_id: StageId,
    n: usize,
    rng: &mut R,
) -> Vec<Question> {
    match table.stage(stage_id) {
        Some(stage) => sample_bank(&stage.bank, n, rng),
        None => {
            log::warn!("Sorteo pedido para la etapa {stage_id}, que no existe");
            Vec::new()
        }
    }
}

/// Construye las etapas de una jornada. Se llama una vez al arrancar
/// o al empezar una jornada nueva; las preguntas no cambian después.
pub fn build_stages<R: Rng + ?Sized>(table: &ContentTable, n: usize, rng: &mut R) -> Vec<Stage> {
    let stages: Vec<Stage> = table
        .stages
        .iter()
        .map(|content| Stage {
            id: content.id,
            title: content.title.clone(),
            video_url: content.video_url.clone(),
            reflection: content.reflection.clone(),
            motivation: content.motivation.clone(),
            questions: sample_bank(&content.bank, n, rng),
        })
        .collect();
    log::info!("Catálogo construido: {} etapas, {} preguntas por etapa", stages.len(), n);
    stages
}
