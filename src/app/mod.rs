use crate::catalog::build_stages;
use crate::community::{CommunityFeed, FeedFilter, FeedSort};
use crate::config::JourneyConfig;
use crate::data::{ContentTable, read_content_embedded};
use crate::effects::{Effects, LogEffects, Sound, track_for_stage};
use crate::model::{ProgressMap, Screen, Sex, StageId, StudyStep};
use crate::sequencer::{ReflectionOutcome, StageSequencer};
use crate::store::{self, JsonFileStore, MemoryStore, RecordStore, SavedRecord};
use eframe::egui;
use rand::rngs::StdRng;
use std::collections::{BTreeSet, HashMap};

// Submódulos
pub mod actions;
pub mod community;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod rewards;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{StageInfo, StepState, StepperItem};

/// Textos a medio escribir en los formularios. No se guardan.
#[derive(Default, Debug, Clone)]
pub struct Drafts {
    pub name: String,
    pub reflection: String,
    pub post: String,
    pub comments: HashMap<u64, String>,
    pub bgm_tracks: Vec<String>,
    pub birth_date: String,
    pub photo: String,
}

pub struct JourneyApp {
    pub screen: Screen,
    pub user_name: String,
    pub birth_date: String,
    pub photo: Option<String>,
    pub sex: Sex,
    pub bgm_tracks: Vec<String>,
    pub declared: BTreeSet<usize>,
    pub drafts: Drafts,
    pub feed_filter: FeedFilter,
    pub feed_sort: FeedSort,
    pub message: String,
    pub confirm_reset: bool,
    /// Cambia en cada `navigate_to`; la vista lo usa como id del scroll para volver arriba.
    pub scroll_generation: u64,
    pub splash_elapsed: f32,
    pub config: JourneyConfig,
    progress: ProgressMap,
    sequencer: StageSequencer,
    community: CommunityFeed,
    content: ContentTable,
    store: Box<dyn RecordStore>,
    effects: Box<dyn Effects>,
    rng: StdRng,
}

impl JourneyApp {
    /// Construye la app a partir de lo guardado. Arranca siempre en la pantalla de presentación.
    pub fn new(
        config: JourneyConfig,
        mut store: Box<dyn RecordStore>,
        effects: Box<dyn Effects>,
        mut rng: StdRng,
    ) -> Self {
        // 1) registro duradero (nunca falla)
        let record = store::load(store.as_mut());

        // 2) catálogo con las preguntas sorteadas para toda la sesión
        let content = read_content_embedded();
        let stages = build_stages(&content, config.questions_per_stage, &mut rng);
        let sequencer = StageSequencer::new(stages, record.current_stage_id);

        // 3) mural: lo guardado o, la primera vez, las publicaciones de ejemplo
        let community = if record.posts.is_empty() {
            CommunityFeed::new(content.community_posts.clone())
        } else {
            CommunityFeed::new(record.posts)
        };

        Self {
            screen: Screen::Splash,
            drafts: Drafts {
                name: record.user_name.clone(),
                bgm_tracks: record.bgm_tracks.clone(),
                birth_date: record.birth_date.clone(),
                photo: record.photo.clone().unwrap_or_default(),
                ..Drafts::default()
            },
            user_name: record.user_name,
            birth_date: record.birth_date,
            photo: record.photo,
            sex: record.sex,
            bgm_tracks: record.bgm_tracks,
            declared: BTreeSet::new(),
            feed_filter: FeedFilter::default(),
            feed_sort: FeedSort::default(),
            message: String::new(),
            confirm_reset: false,
            scroll_generation: 0,
            splash_elapsed: 0.0,
            config,
            progress: record.stage_progress,
            sequencer,
            community,
            content,
            store,
            effects,
            rng,
        }
    }

    /// Configuración de escritorio: fichero JSON (o memoria con `ephemeral`) y efectos por log.
    pub fn from_config(config: JourneyConfig, ephemeral: bool) -> Self {
        let store: Box<dyn RecordStore> = if ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(JsonFileStore::new(config.data_path.clone()))
        };
        let rng = config.make_rng();
        Self::new(config, store, Box::new(LogEffects::default()), rng)
    }

    pub fn sequencer(&self) -> &StageSequencer {
        &self.sequencer
    }

    pub fn progress_map(&self) -> &ProgressMap {
        &self.progress
    }

    pub fn community(&self) -> &CommunityFeed {
        &self.community
    }

    pub fn declarations(&self) -> &[String] {
        &self.content.declarations
    }
}
