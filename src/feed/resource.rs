use fake::Dummy;

/// Defines article data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub image_url: String, // Derived locally, not part of the API
}

impl Article {
    /// First letter of the title, uppercased, shown as the card avatar.
    ///
    pub fn initial(&self) -> String {
        self.title
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| String::from("?"))
    }
}

/// Defines comment data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Defines the ordered comments of one article.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Default)]
pub struct CommentThread {
    pub article_id: u64,
    pub items: Vec<Comment>,
}
