mod client;
mod error;
mod imagery;
mod models;
mod resource;

pub use error::FeedError;
pub use imagery::image_url;
pub use resource::*;

use client::Client;
use log::*;
use models::{CommentModel, PostModel};
use std::collections::HashSet;

/// Default API base.
///
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default cap on the number of articles kept from one load.
///
pub const DEFAULT_ARTICLE_LIMIT: usize = 20;

/// Result of loading one article together with its comments. Each part keeps
/// its own outcome.
///
#[derive(Debug)]
pub struct ArticleDetail {
    pub article: Result<Article, FeedError>,
    pub comments: Result<CommentThread, FeedError>,
}

/// Responsible for asynchronous interaction with the article API including
/// transformation of response data into explicitly-defined types.
///
pub struct Feed {
    client: Client,
    article_limit: usize,
}

impl Feed {
    /// Returns a new instance for the given base URL and article cap.
    ///
    pub fn new(base_url: &str, article_limit: usize) -> Result<Feed, FeedError> {
        debug!(
            "Initializing feed client for {} (article limit {})...",
            base_url, article_limit
        );
        Ok(Feed {
            client: Client::new(base_url)?,
            article_limit,
        })
    }

    /// Returns the article collection, capped to the configured limit.
    ///
    pub async fn articles(&self) -> Result<Vec<Article>, FeedError> {
        debug!("Requesting up to {} articles...", self.article_limit);
        let data: Vec<PostModel> = self
            .client
            .get("posts", &[("_limit", self.article_limit.to_string())])
            .await?;
        let articles = normalize_articles(data, self.article_limit);
        debug!("Retrieved {} articles", articles.len());
        Ok(articles)
    }

    /// Returns the article with the given id.
    ///
    pub async fn article(&self, id: u64) -> Result<Article, FeedError> {
        debug!("Requesting article {}...", id);
        let data: PostModel = self.client.get(&format!("posts/{}", id), &[]).await?;
        Ok(article_from(data))
    }

    /// Returns the comments of the article with the given id, in API order.
    ///
    pub async fn comments(&self, article_id: u64) -> Result<CommentThread, FeedError> {
        debug!("Requesting comments for article {}...", article_id);
        let data: Vec<CommentModel> = self
            .client
            .get(&format!("posts/{}/comments", article_id), &[])
            .await?;
        Ok(CommentThread {
            article_id,
            items: data
                .into_iter()
                .map(|c| Comment {
                    id: c.id,
                    post_id: c.post_id,
                    name: c.name,
                    email: c.email,
                    body: c.body,
                })
                .collect(),
        })
    }

    /// Request an article and its comments concurrently, returning once both
    /// requests have completed.
    ///
    pub async fn article_detail(&self, id: u64) -> ArticleDetail {
        let (article, comments) = tokio::join!(self.article(id), self.comments(id));
        ArticleDetail { article, comments }
    }
}

/// Drop repeated ids (first occurrence wins), cap the list and attach cover
/// images.
///
fn normalize_articles(data: Vec<PostModel>, limit: usize) -> Vec<Article> {
    let mut seen = HashSet::new();
    data.into_iter()
        .filter(|post| seen.insert(post.id))
        .take(limit)
        .map(article_from)
        .collect()
}

fn article_from(post: PostModel) -> Article {
    Article {
        image_url: image_url(post.id),
        id: post.id,
        title: post.title,
        body: post.body,
    }
}
