//! Wire shapes of the article API.

use serde::Deserialize;

/// Post as served by `/posts` and `/posts/{id}`.
///
#[derive(Debug, Deserialize)]
pub(crate) struct PostModel {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Comment as served by `/posts/{id}/comments`.
///
#[derive(Debug, Deserialize)]
pub(crate) struct CommentModel {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
