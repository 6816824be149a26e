use serde::{Deserialize, Serialize};

pub const MAX_POST_CHARS: usize = 280;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub message: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_user_post: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeedFilter {
    #[default]
    All,
    Mine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeedSort {
    #[default]
    Recent,
    Popular,
}

/// Mural de la comunidad: lista de publicaciones, la más reciente primero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunityFeed {
    posts: Vec<Post>,
}

impl CommunityFeed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn next_post_id(&self) -> u64 {
        self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Publica un mensaje propio. Devuelve el id, o `None` si el texto está vacío o es demasiado largo.
    pub fn add_post(&mut self, author: &str, message: &str) -> Option<u64> {
        let message = message.trim();
        if message.is_empty() || message.chars().count() > MAX_POST_CHARS {
            log::debug!("Publicación rechazada ({} caracteres)", message.chars().count());
            return None;
        }
        let id = self.next_post_id();
        self.posts.insert(
            0,
            Post {
                id,
                author: author.to_string(),
                message: message.to_string(),
                likes: 0,
                is_liked: false,
                is_user_post: true,
                comments: Vec::new(),
            },
        );
        Some(id)
    }

    /// Alterna "curtir" sobre una publicación ajena. Las propias no se pueden curtir.
    pub fn toggle_like(&mut self, id: u64) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if post.is_user_post {
            return false;
        }
        if post.is_liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.is_liked = !post.is_liked;
        true
    }

    pub fn add_comment(&mut self, post_id: u64, author: &str, message: &str) -> Option<u64> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        let id = post.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        post.comments.push(Comment {
            id,
            author: author.to_string(),
            message: message.to_string(),
        });
        Some(id)
    }

    pub fn displayed(&self, filter: FeedFilter, sort: FeedSort) -> Vec<&Post> {
        let mut shown: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| filter == FeedFilter::All || p.is_user_post)
            .collect();
        match sort {
            FeedSort::Recent => shown.sort_by(|a, b| b.id.cmp(&a.id)),
            FeedSort::Popular => {
                shown.sort_by(|a, b| b.likes.cmp(&a.likes).then(b.id.cmp(&a.id)))
            }
        }
        shown
    }
}

/// Iniciales para el avatar: primera y última palabra, o las dos primeras letras.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let raw: String = match words.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    raw.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CommunityFeed {
        CommunityFeed::new(vec![
            Post {
                id: 1,
                author: "Ana".into(),
                message: "uno".into(),
                likes: 3,
                is_liked: false,
                is_user_post: false,
                comments: vec![],
            },
            Post {
                id: 2,
                author: "Rui".into(),
                message: "dos".into(),
                likes: 9,
                is_liked: false,
                is_user_post: false,
                comments: vec![],
            },
        ])
    }

    #[test]
    fn add_post_prepends_with_increasing_id() {
        let mut feed = seeded();
        let id = feed.add_post("Eu", "  Olá mural  ").unwrap();
        assert_eq!(id, 3);
        assert_eq!(feed.posts()[0].message, "Olá mural");
        assert!(feed.posts()[0].is_user_post);
    }

    #[test]
    fn add_post_rejects_blank_and_overlong() {
        let mut feed = seeded();
        assert_eq!(feed.add_post("Eu", "   "), None);
        assert_eq!(feed.add_post("Eu", &"x".repeat(MAX_POST_CHARS + 1)), None);
        assert!(feed.add_post("Eu", &"é".repeat(MAX_POST_CHARS)).is_some());
        assert_eq!(feed.posts().len(), 3);
    }

    #[test]
    fn toggle_like_flips_and_skips_own_posts() {
        let mut feed = seeded();
        assert!(feed.toggle_like(1));
        assert_eq!(feed.post(1).unwrap().likes, 4);
        assert!(feed.post(1).unwrap().is_liked);
        assert!(feed.toggle_like(1));
        assert_eq!(feed.post(1).unwrap().likes, 3);

        let own = feed.add_post("Eu", "meu").unwrap();
        assert!(!feed.toggle_like(own));
        assert_eq!(feed.post(own).unwrap().likes, 0);
        assert!(!feed.toggle_like(99));
    }

    #[test]
    fn comments_attach_to_existing_posts_only() {
        let mut feed = seeded();
        assert_eq!(feed.add_comment(2, "Eu", "amém"), Some(1));
        assert_eq!(feed.add_comment(2, "Eu", "de novo"), Some(2));
        assert_eq!(feed.add_comment(2, "Eu", " "), None);
        assert_eq!(feed.add_comment(42, "Eu", "nada"), None);
        assert_eq!(feed.post(2).unwrap().comments.len(), 2);
    }

    #[test]
    fn displayed_filters_and_sorts() {
        let mut feed = seeded();
        feed.add_post("Eu", "meu").unwrap();

        let recent: Vec<u64> = feed.displayed(FeedFilter::All, FeedSort::Recent).iter().map(|p| p.id).collect();
        assert_eq!(recent, vec![3, 2, 1]);

        let popular: Vec<u64> = feed.displayed(FeedFilter::All, FeedSort::Popular).iter().map(|p| p.id).collect();
        assert_eq!(popular, vec![2, 1, 3]);

        let mine: Vec<u64> = feed.displayed(FeedFilter::Mine, FeedSort::Recent).iter().map(|p| p.id).collect();
        assert_eq!(mine, vec![3]);
    }

    #[test]
    fn initials_cover_single_and_multi_word_names() {
        assert_eq!(initials("Ana Paula Souza"), "AS");
        assert_eq!(initials("juliana"), "JU");
        assert_eq!(initials("É"), "É");
        assert_eq!(initials(""), "");
    }
}
