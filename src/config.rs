use crate::catalog::DEFAULT_QUESTIONS_PER_STAGE;
use crate::error::ConfigError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "JORNADA_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "jornada.yaml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct JourneyConfig {
    pub questions_per_stage: usize,
    pub data_path: PathBuf,
    pub splash_seconds: f32,
    /// Pistas por defecto cuando el usuario no configura las suyas.
    pub bgm_tracks: Vec<String>,
    /// Semilla fija para sorteos reproducibles.
    pub seed: Option<u64>,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            questions_per_stage: DEFAULT_QUESTIONS_PER_STAGE,
            data_path: PathBuf::from("jornada_progress.json"),
            splash_seconds: 10.0,
            bgm_tracks: Vec::new(),
            seed: None,
        }
    }
}

impl JourneyConfig {
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: JourneyConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// `$JORNADA_CONFIG`, después `jornada.yaml` y si no existe, los valores por defecto.
    /// Un fichero inválido se registra y no impide arrancar.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if !path.exists() {
            log::debug!("Sin fichero de configuración en {}", path.display());
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Configuración cargada de {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Configuración inválida en {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.questions_per_stage == 0 {
            return Err(ConfigError::Invalid {
                field: "questions_per_stage",
                reason: "debe ser mayor que 0".into(),
            });
        }
        if !(self.splash_seconds.is_finite() && self.splash_seconds >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "splash_seconds",
                reason: format!("{} no es una duración válida", self.splash_seconds),
            });
        }
        Ok(())
    }

    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = JourneyConfig::from_yaml("questions_per_stage: 5\nseed: 9\n").unwrap();
        assert_eq!(config.questions_per_stage, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.data_path, PathBuf::from("jornada_progress.json"));
        assert_eq!(config.splash_seconds, 10.0);
    }

    #[test]
    fn zero_questions_is_rejected() {
        let err = JourneyConfig::from_yaml("questions_per_stage: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "questions_per_stage", .. }));
        assert!(matches!(JourneyConfig::from_yaml("seed: [1"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = JourneyConfig {
            seed: Some(11),
            ..JourneyConfig::default()
        };
        let a: u32 = config.make_rng().gen_range(0..1_000_000);
        let b: u32 = config.make_rng().gen_range(0..1_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jornada.yaml");
        std::fs::write(&path, "bgm_tracks: [a.mp3, b.mp3]\nsplash_seconds: 2.5\n").unwrap();
        let config = JourneyConfig::from_file(&path).unwrap();
        assert_eq!(config.bgm_tracks.len(), 2);
        assert_eq!(config.splash_seconds, 2.5);
        assert!(JourneyConfig::from_file(&dir.path().join("nope.yaml")).is_err());
    }
}
