use crate::JourneyApp;
use crate::community::{FeedFilter, FeedSort, MAX_POST_CHARS, initials};
use crate::ui::helpers::avatar;
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, RichText, TextEdit};

enum WallAction {
    Publish,
    Like(u64),
    Comment(u64),
    Filter(FeedFilter),
    Sort(FeedSort),
    Back,
}

pub fn ui_community(app: &mut JourneyApp, ctx: &Context) {
    let generation = app.scroll_generation;
    let mut action: Option<WallAction> = None;

    scroll_panel(ctx, generation, 640.0, |ui| {
        ui.heading("Mural da Comunidade");
        ui.add_space(8.0);

        // ----------- NUEVA PUBLICACIÓN -----------
        ui.add(
            TextEdit::multiline(&mut app.drafts.post)
                .hint_text("Compartilhe o que Deus tem feito em sua vida...")
                .char_limit(MAX_POST_CHARS)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        let used = app.drafts.post.chars().count();
        ui.horizontal(|ui| {
            ui.label(format!("{used}/{MAX_POST_CHARS}"));
            let can_post = !app.drafts.post.trim().is_empty();
            if ui.add_enabled(can_post, Button::new("Publicar")).clicked() {
                action = Some(WallAction::Publish);
            }
        });
        ui.add_space(8.0);

        // ----------- FILTROS -----------
        ui.horizontal(|ui| {
            if ui.selectable_label(app.feed_filter == FeedFilter::All, "Todos").clicked() {
                action = Some(WallAction::Filter(FeedFilter::All));
            }
            if ui.selectable_label(app.feed_filter == FeedFilter::Mine, "Meus posts").clicked() {
                action = Some(WallAction::Filter(FeedFilter::Mine));
            }
            ui.separator();
            if ui.selectable_label(app.feed_sort == FeedSort::Recent, "Recentes").clicked() {
                action = Some(WallAction::Sort(FeedSort::Recent));
            }
            if ui.selectable_label(app.feed_sort == FeedSort::Popular, "Populares").clicked() {
                action = Some(WallAction::Sort(FeedSort::Popular));
            }
        });
        ui.separator();

        // ----------- PUBLICACIONES -----------
        let posts: Vec<_> = app.displayed_posts().into_iter().cloned().collect();
        if posts.is_empty() {
            ui.label("Nenhuma publicação ainda.");
        }
        for post in posts {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    avatar(ui, &initials(&post.author));
                    ui.label(RichText::new(&post.author).strong());
                });
                ui.label(&post.message);
                ui.horizontal(|ui| {
                    let heart = if post.is_liked { "❤" } else { "♡" };
                    let like = Button::new(format!("{heart} {}", post.likes));
                    if ui.add_enabled(!post.is_user_post, like).clicked() {
                        action = Some(WallAction::Like(post.id));
                    }
                    ui.label(format!("💬 {}", post.comments.len()));
                });
                for comment in &post.comments {
                    ui.label(RichText::new(format!("{}: {}", comment.author, comment.message)).small());
                }
                ui.horizontal(|ui| {
                    let draft = app.drafts.comments.entry(post.id).or_default();
                    ui.add(TextEdit::singleline(draft).hint_text("Comentar..."));
                    if ui.button("Enviar").clicked() {
                        action = Some(WallAction::Comment(post.id));
                    }
                });
            });
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        if ui.button("⬅ Voltar").clicked() {
            action = Some(WallAction::Back);
        }
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });

    match action {
        Some(WallAction::Publish) => {
            app.publish_post();
        }
        Some(WallAction::Like(id)) => {
            app.toggle_like(id);
        }
        Some(WallAction::Comment(id)) => {
            app.publish_comment(id);
        }
        Some(WallAction::Filter(filter)) => app.set_feed_filter(filter),
        Some(WallAction::Sort(sort)) => app.set_feed_sort(sort),
        Some(WallAction::Back) => app.back_to_final(),
        None => {}
    }
}
