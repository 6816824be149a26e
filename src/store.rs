use crate::community::Post;
use crate::error::StoreError;
use crate::model::{ProgressMap, Sex, StageId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Registro duradero de la jornada: lo único que sobrevive a un reinicio de la app.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedRecord {
    pub user_name: String,
    pub birth_date: String,
    pub photo: Option<String>,
    pub sex: Sex,
    pub stage_progress: ProgressMap,
    pub current_stage_id: Option<StageId>,
    pub posts: Vec<Post>,
    pub bgm_tracks: Vec<String>,
}

/// Almacén clave única de texto. `read` devuelve `Ok(None)` si no hay nada guardado.
pub trait RecordStore {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&mut self, raw: &str) -> Result<(), StoreError>;
    fn remove(&mut self) -> Result<(), StoreError>;
}

/// Fichero JSON en disco (por defecto `jornada_progress.json`).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, raw: &str) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Almacén en memoria (`--ephemeral` y tests). Los clones comparten contenido.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(raw: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.to_string()))),
            fail_writes: false,
        }
    }

    /// Variante cuyas escrituras fallan siempre (almacenamiento lleno o bloqueado).
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|s| s.clone())
    }
}

impl RecordStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents())
    }

    fn write(&mut self, raw: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(raw.to_string());
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// Carga el registro. Nunca falla: si lo guardado está corrupto se borra
/// y se empieza de cero.
pub fn load(store: &mut dyn RecordStore) -> SavedRecord {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return SavedRecord::default(),
        Err(e) => {
            log::warn!("No se pudo leer el progreso guardado: {e}");
            return SavedRecord::default();
        }
    };
    match serde_json::from_str::<SavedRecord>(&raw) {
        Ok(record) => {
            log::info!(
                "Progreso cargado: {} etapas registradas",
                record.stage_progress.len()
            );
            record
        }
        Err(e) => {
            log::warn!("Progreso guardado corrupto, se descarta: {e}");
            if let Err(e) = store.remove() {
                log::warn!("No se pudo borrar el progreso corrupto: {e}");
            }
            SavedRecord::default()
        }
    }
}

pub fn try_save(store: &mut dyn RecordStore, record: &SavedRecord) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(record)?;
    store.write(&json)
}

/// Guarda el registro; un fallo se registra y el estado en memoria sigue siendo el válido.
pub fn save(store: &mut dyn RecordStore, record: &SavedRecord) {
    if let Err(e) = try_save(store, record) {
        log::warn!("No se pudo guardar el progreso: {e}");
    }
}

pub fn clear(store: &mut dyn RecordStore) {
    if let Err(e) = store.remove() {
        log::warn!("No se pudo borrar el progreso: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StageProgress;

    fn sample() -> SavedRecord {
        let mut stage_progress = ProgressMap::new();
        stage_progress.insert(
            1,
            StageProgress {
                score: 850,
                reflection: "Sou amado".into(),
                completed: true,
            },
        );
        SavedRecord {
            user_name: "Maria".into(),
            birth_date: "2001-03-09".into(),
            photo: None,
            sex: Sex::Feminino,
            stage_progress,
            current_stage_id: Some(2),
            posts: Vec::new(),
            bgm_tracks: vec!["hino.mp3".into()],
        }
    }

    #[test]
    fn memory_store_round_trips_record() {
        let mut store = MemoryStore::new();
        save(&mut store, &sample());
        assert_eq!(load(&mut store), sample());
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("progress.json"));
        assert_eq!(load(&mut store), SavedRecord::default());

        save(&mut store, &sample());
        assert!(store.path().exists());
        assert_eq!(load(&mut store), sample());

        clear(&mut store);
        assert!(!store.path().exists());
        clear(&mut store);
    }

    #[test]
    fn corrupt_record_is_discarded() {
        let mut store = MemoryStore::with_contents("{ no es json");
        assert_eq!(load(&mut store), SavedRecord::default());
        assert_eq!(store.contents(), None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut store = MemoryStore::with_contents(r#"{"userName":"João","stageProgress":{"3":{"score":100,"reflection":"x","completed":true}}}"#);
        let record = load(&mut store);
        assert_eq!(record.user_name, "João");
        assert_eq!(record.stage_progress[&3].score, 100);
        assert_eq!(record.current_stage_id, None);
        assert_eq!(record.sex, Sex::Masculino);
    }

    #[test]
    fn failed_write_is_reported_and_swallowed() {
        let mut store = MemoryStore::failing();
        assert!(matches!(try_save(&mut store, &sample()), Err(StoreError::Unavailable)));
        save(&mut store, &sample());
        assert_eq!(store.contents(), None);
    }
}
