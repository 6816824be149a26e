// src/data.rs

use crate::community::Post;
use crate::model::{Question, StageId};
use serde::Deserialize;
use std::collections::HashSet;

/// Etapa tal y como viene en el YAML: el banco completo, sin sortear.
#[derive(Deserialize, Debug, Clone)]
pub struct StageContent {
    pub id: StageId,
    pub title: String,
    pub video_url: String,
    pub reflection: String,
    pub motivation: String,
    #[serde(default)]
    pub bank: Vec<Question>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ContentTable {
    pub stages: Vec<StageContent>,
    #[serde(default)]
    pub declarations: Vec<String>,
    #[serde(default)]
    pub community_posts: Vec<Post>,
}

/// Carga el contenido fijo (etapas, bancos, declaraciones y mural) desde el YAML embebido
pub fn read_content_embedded() -> ContentTable {
    let file_content = include_str!("data/content.yaml");
    parse_content(file_content).expect("No se pudo parsear el contenido YAML embebido")
}

pub fn parse_content(raw: &str) -> Result<ContentTable, serde_yaml::Error> {
    let mut table: ContentTable = serde_yaml::from_str(raw)?;
    table.validate();
    Ok(table)
}

impl ContentTable {
    /// Descarta etapas con id repetido o nulo y preguntas mal formadas.
    /// Devuelve cuántas preguntas se han descartado.
    pub fn validate(&mut self) -> usize {
        let mut seen = HashSet::new();
        self.stages.retain(|s| {
            let keep = s.id > 0 && seen.insert(s.id);
            if !keep {
                log::warn!("Etapa {} ignorada: id nulo o repetido", s.id);
            }
            keep
        });
        self.stages.sort_by_key(|s| s.id);

        let mut dropped = 0;
        for stage in &mut self.stages {
            let before = stage.bank.len();
            stage.bank.retain(Question::is_well_formed);
            let removed = before - stage.bank.len();
            if removed > 0 {
                log::warn!("Etapa {}: {} preguntas mal formadas descartadas", stage.id, removed);
            }
            dropped += removed;
        }
        dropped
    }

    pub fn stage(&self, id: StageId) -> Option<&StageContent> {
        self.stages.iter().find(|s| s.id == id)
    }
}
