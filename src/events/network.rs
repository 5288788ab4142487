use crate::feed::Feed;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Articles { generation: u64 },
    ArticleDetail { post_id: u64, generation: u64 },
}

/// Handle one network event on its own task so that a slow request does not
/// hold up the events queued behind it. Stale results are dropped by the
/// generation checks in state.
///
pub fn spawn(state: Arc<Mutex<State>>, feed: Arc<Feed>, event: Event) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = Handler::new(&state, &feed).handle(event).await {
            error!("Failed to handle network event: {}", e);
        }
    })
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    feed: &'a Feed,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, feed: &'a Feed) -> Self {
        Handler { state, feed }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Articles { generation } => self.articles(generation).await?,
            Event::ArticleDetail {
                post_id,
                generation,
            } => self.article_detail(post_id, generation).await?,
        }
        Ok(())
    }

    /// Update state with the article collection.
    ///
    async fn articles(&mut self, generation: u64) -> Result<()> {
        info!("Fetching articles...");
        let result = self.feed.articles().await;
        let mut state = self.state.lock().await;
        let now = state.now();
        state.apply_articles(generation, result, now);
        Ok(())
    }

    /// Update state with one article and its comments.
    ///
    async fn article_detail(&mut self, post_id: u64, generation: u64) -> Result<()> {
        info!("Fetching article {} and its comments...", post_id);
        let detail = self.feed.article_detail(post_id).await;
        let mut state = self.state.lock().await;
        if state.apply_article_detail(generation, post_id, detail) {
            info!("Received article {}.", post_id);
        }
        Ok(())
    }
}
