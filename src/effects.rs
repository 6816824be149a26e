use std::sync::{Arc, Mutex};

/// Efectos de sonido cortos. Cada acción dispara como mucho uno.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Click,
    Correct,
    Incorrect,
    Declare,
    Like,
    StageComplete,
    NewPost,
    CopySuccess,
    CopyFail,
    Toggle,
}

/// Salida de audio y celebraciones. Es fire-and-forget: un fallo no afecta
/// al estado de la jornada.
pub trait Effects {
    fn play(&mut self, sound: Sound);
    fn celebrate(&mut self);
    fn start_background_music(&mut self, track: &str);
    fn stop_background_music(&mut self);
}

/// Implementación por defecto: sólo deja constancia en el log.
#[derive(Default, Debug)]
pub struct LogEffects {
    current_track: Option<String>,
}

impl Effects for LogEffects {
    fn play(&mut self, sound: Sound) {
        log::debug!("🔊 {sound:?}");
    }

    fn celebrate(&mut self) {
        log::debug!("🎉 Confete");
    }

    fn start_background_music(&mut self, track: &str) {
        if self.current_track.as_deref() == Some(track) {
            return;
        }
        log::info!("🎵 Música de fondo: {track}");
        self.current_track = Some(track.to_string());
    }

    fn stop_background_music(&mut self) {
        if self.current_track.take().is_some() {
            log::info!("🎵 Música de fondo detenida");
        }
    }
}

/// Lo que se ha pedido a un `RecordingEffects`, en orden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectEvent {
    Played(Sound),
    Celebrated,
    MusicStarted(String),
    MusicStopped,
}

/// Registra cada efecto en una lista compartida; la copia clonada sirve
/// para inspeccionar lo que hizo la app después de entregarle la otra.
#[derive(Clone, Default, Debug)]
pub struct RecordingEffects {
    events: Arc<Mutex<Vec<EffectEvent>>>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EffectEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                EffectEvent::Played(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn push(&self, event: EffectEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Effects for RecordingEffects {
    fn play(&mut self, sound: Sound) {
        self.push(EffectEvent::Played(sound));
    }

    fn celebrate(&mut self) {
        self.push(EffectEvent::Celebrated);
    }

    fn start_background_music(&mut self, track: &str) {
        self.push(EffectEvent::MusicStarted(track.to_string()));
    }

    fn stop_background_music(&mut self) {
        self.push(EffectEvent::MusicStopped);
    }
}

/// Pista de fondo para la etapa en posición `stage_index` (0-based).
/// Cada etapa usa su propia pista del usuario; si ese hueco está vacío,
/// la de la configuración, recorrida en ciclo.
pub fn track_for_stage<'a>(user_tracks: &'a [String], fallback: &'a [String], stage_index: usize) -> Option<&'a str> {
    if let Some(track) = user_tracks.get(stage_index).map(|t| t.trim()).filter(|t| !t.is_empty()) {
        return Some(track);
    }
    if fallback.is_empty() {
        return None;
    }
    Some(fallback[stage_index % fallback.len()].as_str())
}
