use super::LoadState;
use crate::feed::{Article, ArticleDetail, CommentThread};
use log::*;

/// Article and comment thread shown in the detail view, each with its own
/// load lifecycle.
///
#[derive(Debug, Clone)]
pub struct DetailState {
    pub post_id: u64,
    pub article_load: LoadState,
    pub comments_load: LoadState,
    pub article: Option<Article>,
    pub comments: Option<CommentThread>,
    pub scroll: u16,
}

impl DetailState {
    /// Returns a detail awaiting both of its parts.
    ///
    pub fn loading(post_id: u64) -> Self {
        DetailState {
            post_id,
            article_load: LoadState::Loading,
            comments_load: LoadState::Loading,
            article: None,
            comments: None,
            scroll: 0,
        }
    }

    /// Mark both parts failed without a response.
    ///
    pub fn fail(&mut self) {
        self.article_load = LoadState::Failed;
        self.comments_load = LoadState::Failed;
    }

    /// Record the outcome of a joined article and comments request.
    ///
    pub fn apply(&mut self, detail: ArticleDetail) {
        match detail.article {
            Ok(article) => {
                self.article = Some(article);
                self.article_load = LoadState::Loaded;
            }
            Err(e) => {
                error!(
                    "Failed to load article {} ({}): {}",
                    self.post_id,
                    e.kind(),
                    e
                );
                self.article_load = LoadState::Failed;
            }
        }
        match detail.comments {
            Ok(comments) => {
                self.comments = Some(comments);
                self.comments_load = LoadState::Loaded;
            }
            Err(e) => {
                error!(
                    "Failed to load comments for article {} ({}): {}",
                    self.post_id,
                    e.kind(),
                    e
                );
                self.comments_load = LoadState::Failed;
            }
        }
    }

    /// Combined lifecycle: failed if either part failed, loaded only once
    /// both parts are loaded.
    ///
    pub fn status(&self) -> LoadState {
        match (self.article_load, self.comments_load) {
            (LoadState::Failed, _) | (_, LoadState::Failed) => LoadState::Failed,
            (LoadState::Loaded, LoadState::Loaded) => LoadState::Loaded,
            (LoadState::Idle, LoadState::Idle) => LoadState::Idle,
            _ => LoadState::Loading,
        }
    }

    /// Article and comments, available only when both parts loaded.
    ///
    pub fn content(&self) -> Option<(&Article, &CommentThread)> {
        if self.status() != LoadState::Loaded {
            return None;
        }
        Some((self.article.as_ref()?, self.comments.as_ref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedError;
    use fake::{Fake, Faker};

    fn article(id: u64) -> Article {
        Article {
            id,
            ..Faker.fake::<Article>()
        }
    }

    #[test]
    fn loaded_when_both_parts_succeed() {
        let mut detail = DetailState::loading(2);
        assert_eq!(detail.status(), LoadState::Loading);
        detail.apply(ArticleDetail {
            article: Ok(article(2)),
            comments: Ok(CommentThread {
                article_id: 2,
                items: vec![],
            }),
        });
        assert_eq!(detail.status(), LoadState::Loaded);
        assert!(detail.content().is_some());
    }

    #[test]
    fn failed_comments_fail_the_whole_detail() {
        let mut detail = DetailState::loading(2);
        detail.apply(ArticleDetail {
            article: Ok(article(2)),
            comments: Err(FeedError::Response {
                status: 500,
                message: String::new(),
            }),
        });
        assert_eq!(detail.article_load, LoadState::Loaded);
        assert_eq!(detail.comments_load, LoadState::Failed);
        assert_eq!(detail.status(), LoadState::Failed);
        assert!(detail.content().is_none());
    }
}
