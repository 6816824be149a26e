use jornada_quiz::JourneyApp;
use jornada_quiz::config::JourneyConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    // --ephemeral: no lee ni escribe el progreso en disco
    let ephemeral = std::env::args().skip(1).any(|a| a == "--ephemeral");
    let config = JourneyConfig::load();
    log::info!(
        "Iniciando jornada ({} perguntas por etapa, progresso em {})",
        config.questions_per_stage,
        if ephemeral { "memória".to_string() } else { config.data_path.display().to_string() }
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Identidade em Cristo",
        options,
        Box::new(move |_cc| Ok(Box::new(JourneyApp::from_config(config, ephemeral)))),
    )
}
