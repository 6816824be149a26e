use super::*;
use crate::community::{MAX_POST_CHARS, Post};

impl JourneyApp {
    /// Publica el borrador del mural con el nombre del usuario.
    pub fn publish_post(&mut self) -> Option<u64> {
        let author = self.author_name();
        let id = self.community.add_post(&author, &self.drafts.post);
        match id {
            Some(id) => {
                self.effects.play(Sound::NewPost);
                self.drafts.post.clear();
                self.persist();
                log::info!("Nova publicação {id}");
            }
            None => {
                self.message = format!("A mensagem deve ter entre 1 e {MAX_POST_CHARS} caracteres.");
            }
        }
        id
    }

    pub fn toggle_like(&mut self, post_id: u64) -> bool {
        if !self.community.toggle_like(post_id) {
            return false;
        }
        self.effects.play(Sound::Like);
        self.persist();
        true
    }

    pub fn publish_comment(&mut self, post_id: u64) -> Option<u64> {
        let author = self.author_name();
        let draft = self.drafts.comments.get(&post_id).cloned().unwrap_or_default();
        let id = self.community.add_comment(post_id, &author, &draft)?;
        self.drafts.comments.remove(&post_id);
        self.effects.play(Sound::NewPost);
        self.persist();
        Some(id)
    }

    pub fn set_feed_filter(&mut self, filter: FeedFilter) {
        if self.feed_filter != filter {
            self.effects.play(Sound::Toggle);
            self.feed_filter = filter;
        }
    }

    pub fn set_feed_sort(&mut self, sort: FeedSort) {
        if self.feed_sort != sort {
            self.effects.play(Sound::Toggle);
            self.feed_sort = sort;
        }
    }

    pub fn displayed_posts(&self) -> Vec<&Post> {
        self.community.displayed(self.feed_filter, self.feed_sort)
    }

    fn author_name(&self) -> String {
        let name = self.user_name.trim();
        if name.is_empty() { "Anônimo".to_string() } else { name.to_string() }
    }
}
