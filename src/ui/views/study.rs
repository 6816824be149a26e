use crate::JourneyApp;
use crate::app::StepState;
use crate::model::StudyStep;
use crate::quiz::Feedback;
use crate::ui::helpers::{big_button, option_button};
use crate::ui::layout::scroll_panel;
use egui::{Color32, Context, ProgressBar, RichText, TextEdit, Ui};

/// Lo que el usuario ha pulsado en este frame; se aplica al salir del panel.
enum StudyAction {
    Back,
    BeginQuiz,
    WatchAgain,
    Select(usize),
    Submit,
    Next,
    Reflect,
}

pub fn ui_study(app: &mut JourneyApp, ctx: &Context) {
    // Etapa guardada inexistente: vuelve a la bienvenida
    if app.current_stage().is_none() {
        app.open_study();
        return;
    }

    let generation = app.scroll_generation;
    let mut action: Option<StudyAction> = None;

    scroll_panel(ctx, generation, 680.0, |ui| {
        header(app, ui, &mut action);
        ui.add_space(10.0);
        match app.current_step() {
            StudyStep::Video => video_step(app, ui, &mut action),
            StudyStep::Quiz => quiz_step(app, ui, &mut action),
            StudyStep::Reflection => reflection_step(app, ui, &mut action),
        }
        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
        }
    });

    match action {
        Some(StudyAction::Back) => {
            app.go_to_previous_stage();
        }
        Some(StudyAction::BeginQuiz) => {
            app.begin_quiz();
        }
        Some(StudyAction::WatchAgain) => {
            app.watch_video_again();
        }
        Some(StudyAction::Select(option)) => {
            app.select_option(option);
        }
        Some(StudyAction::Submit) => {
            app.submit_answer();
        }
        Some(StudyAction::Next) => {
            app.next_question();
        }
        Some(StudyAction::Reflect) => {
            app.submit_reflection();
        }
        None => {}
    }
}

fn header(app: &JourneyApp, ui: &mut Ui, action: &mut Option<StudyAction>) {
    ui.horizontal(|ui| {
        if app.can_go_back() && ui.button("⬅ Voltar etapa").clicked() {
            *action = Some(StudyAction::Back);
        }
        if let Some(stage) = app.current_stage() {
            ui.heading(&stage.title);
        }
    });

    let ratio = app.completion_ratio();
    ui.add(ProgressBar::new(ratio).text(format!("{:.0}% concluído", ratio * 100.0)));

    // Etapas de la jornada
    ui.horizontal_wrapped(|ui| {
        for info in app.stage_infos() {
            let text = RichText::new(info.label()).small();
            let text = if info.current {
                text.strong().color(Color32::LIGHT_BLUE)
            } else if info.completed {
                text.color(Color32::from_rgb(80, 200, 120))
            } else {
                text.weak()
            };
            ui.label(text).on_hover_text(&info.title);
        }
    });

    // Paso a paso
    ui.horizontal(|ui| {
        for item in app.stepper() {
            let text = RichText::new(item.label());
            let text = match item.state {
                StepState::Active => text.strong().color(Color32::LIGHT_BLUE),
                StepState::Done => text.color(Color32::from_rgb(80, 200, 120)),
                StepState::Pending => text.weak(),
            };
            ui.label(text);
            ui.add_space(12.0);
        }
    });
}

fn video_step(app: &JourneyApp, ui: &mut Ui, action: &mut Option<StudyAction>) {
    let Some(stage) = app.current_stage() else {
        return;
    };
    ui.label(RichText::new(&stage.motivation).italics());
    ui.add_space(8.0);
    if !stage.video_url.is_empty() {
        ui.hyperlink_to("▶ Assistir ao vídeo da etapa", &stage.video_url);
    }
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        if big_button(ui, "Já assisti, ir para o quiz", 300.0, true) {
            *action = Some(StudyAction::BeginQuiz);
        }
    });
}

fn quiz_step(app: &JourneyApp, ui: &mut Ui, action: &mut Option<StudyAction>) {
    let Some(quiz) = app.sequencer().quiz() else {
        return;
    };
    let Some(question) = quiz.current_question() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!(
            "Pergunta {} de {}",
            quiz.question_index() + 1,
            quiz.question_count()
        ));
        ui.separator();
        ui.label(format!("Tentativa {}", quiz.attempt()));
        ui.separator();
        ui.label(format!("Pontos nesta etapa: {}", quiz.running_score()));
    });
    ui.add_space(8.0);
    ui.label(RichText::new(&question.prompt).size(18.0).strong());
    ui.add_space(10.0);

    let width = ui.available_width();
    for slot in quiz.option_slots() {
        if option_button(ui, slot.text, width, slot.enabled, slot.selected, slot.tried_wrong, slot.is_correct) {
            *action = Some(StudyAction::Select(slot.index));
        }
        ui.add_space(4.0);
    }
    ui.add_space(10.0);

    match quiz.feedback() {
        None => {
            let can_submit = quiz.selected().is_some();
            ui.horizontal(|ui| {
                if big_button(ui, "Responder", 200.0, can_submit) {
                    *action = Some(StudyAction::Submit);
                }
                if ui.button("🎬 Assistir vídeo novamente").clicked() {
                    *action = Some(StudyAction::WatchAgain);
                }
            });
        }
        Some(feedback) => {
            match feedback {
                Feedback::Correct { explanation } => {
                    ui.label(RichText::new("Resposta Correta!").strong().color(Color32::from_rgb(80, 200, 120)));
                    if !explanation.is_empty() {
                        ui.label(explanation);
                    }
                }
                Feedback::Exhausted { correct_answer } => {
                    ui.label(
                        RichText::new(format!(
                            "Todas as tentativas esgotadas. A resposta correta era: {correct_answer}"
                        ))
                        .color(Color32::from_rgb(220, 120, 80)),
                    );
                }
            }
            ui.add_space(8.0);
            let label = if quiz.is_last_question() {
                "Concluir quiz"
            } else {
                "Próxima pergunta"
            };
            if big_button(ui, label, 200.0, true) {
                *action = Some(StudyAction::Next);
            }
        }
    }
}

fn reflection_step(app: &mut JourneyApp, ui: &mut Ui, action: &mut Option<StudyAction>) {
    if let Some(score) = app.sequencer().pending_score() {
        ui.label(RichText::new(format!("Você fez {score} pontos nesta etapa!")).strong());
    }
    if let Some(stage) = app.current_stage() {
        ui.add_space(6.0);
        ui.label(&stage.reflection);
    }
    ui.add_space(10.0);
    ui.label("Diário de reflexão pessoal:");
    ui.add(
        TextEdit::multiline(&mut app.drafts.reflection)
            .hint_text("Escreva aqui o que Deus falou ao seu coração...")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);
    let can_submit = !app.drafts.reflection.trim().is_empty();
    let label = if app.sequencer().is_last_stage() {
        "Concluir jornada"
    } else {
        "Concluir etapa"
    };
    if big_button(ui, label, 220.0, can_submit) {
        *action = Some(StudyAction::Reflect);
    }
}
