use super::{DetailState, FavoriteSet, Flight, LoadState, Press, PressSource, View};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::feed::{Article, ArticleDetail, FeedError};
use crate::motion::{ItemFrame, Millis, MotionTable, ScreenEntrance, ScreenFrame};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use chrono::{DateTime, Local};
use log::*;
use ratatui::layout::Rect;
use std::time::Instant;

/// How long a keyboard activation holds a card down before releasing it.
///
pub const PRESS_HOLD_IN_MS: Millis = 120;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    clock: Instant,
    theme: Theme,
    spinner_index: usize,
    view_stack: Vec<View>,
    articles: Vec<Article>,
    articles_load: LoadState,
    articles_flight: Flight,
    loaded_at: Option<DateTime<Local>>,
    motion: MotionTable,
    screen: Option<ScreenEntrance>,
    favorites: FavoriteSet,
    selected: usize,
    card_regions: Vec<(u64, Rect)>, // Article id -> area drawn during the last render
    press: Option<Press>,
    detail: Option<DetailState>,
    detail_flight: Flight,
    show_log: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            clock: Instant::now(),
            theme: Theme::default(),
            spinner_index: 0,
            view_stack: vec![View::Articles],
            articles: vec![],
            articles_load: LoadState::Idle,
            articles_flight: Flight::default(),
            loaded_at: None,
            motion: MotionTable::default(),
            screen: None,
            favorites: FavoriteSet::default(),
            selected: 0,
            card_regions: vec![],
            press: None,
            detail: None,
            detail_flight: Flight::default(),
            show_log: false,
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    /// Milliseconds elapsed on the screen clock.
    ///
    pub fn now(&self) -> Millis {
        self.clock.elapsed().as_millis() as Millis
    }

    /// Returns the active theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Return whether the log panel is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Show or hide the log panel.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        *self.view_stack.last().unwrap_or(&View::Articles)
    }

    // ---- Article list ------------------------------------------------------

    /// Returns the rendered articles in list order.
    ///
    pub fn get_articles(&self) -> &[Article] {
        &self.articles
    }

    /// Returns the article list lifecycle.
    ///
    pub fn get_articles_load(&self) -> LoadState {
        self.articles_load
    }

    /// Returns when the article list was last replaced.
    ///
    pub fn get_loaded_at(&self) -> Option<&DateTime<Local>> {
        self.loaded_at.as_ref()
    }

    /// Returns the motion table of the current load cycle.
    ///
    pub fn get_motion(&self) -> &MotionTable {
        &self.motion
    }

    /// Request the article list unless a request is already outstanding.
    /// Returns the generation of the dispatched request.
    ///
    pub fn request_articles(&mut self) -> Option<u64> {
        let generation = match self.articles_flight.try_begin() {
            Some(generation) => generation,
            None => {
                debug!("Ignoring refresh, articles are already loading.");
                return None;
            }
        };
        self.articles_load = LoadState::Loading;
        if !self.dispatch(NetworkEvent::Articles { generation }) {
            self.articles_flight.complete(generation);
            self.articles_load = LoadState::Failed;
            return None;
        }
        Some(generation)
    }

    /// Record the response to the article request with `generation`. On
    /// success the list and motion table are replaced and the entrance
    /// cascade starts at `now`; on failure the previous list is kept.
    /// Returns false if the response was stale and ignored.
    ///
    pub fn apply_articles(
        &mut self,
        generation: u64,
        result: Result<Vec<Article>, FeedError>,
        now: Millis,
    ) -> bool {
        if !self.articles_flight.complete(generation) {
            warn!("Dropping stale article response (generation {}).", generation);
            return false;
        }
        match result {
            Ok(articles) => {
                info!("Loaded {} articles.", articles.len());
                let ids: Vec<u64> = articles.iter().map(|a| a.id).collect();
                let frame = self.screen_frame(now);
                self.motion = MotionTable::schedule(*self.motion.timing(), &ids, now);
                self.articles = articles;
                self.screen = Some(ScreenEntrance::begin(frame, now));
                self.articles_load = LoadState::Loaded;
                self.loaded_at = Some(Local::now());
                // A held key press still opens its article once released.
                self.press = match self.press.take() {
                    Some(press @ Press {
                        source: PressSource::Key { .. },
                        ..
                    }) => {
                        self.motion.press_in(press.id, now);
                        Some(press)
                    }
                    _ => None,
                };
                self.card_regions.clear();
                if self.selected >= self.articles.len() {
                    self.selected = self.articles.len().saturating_sub(1);
                }
            }
            Err(e) => {
                error!("Failed to load articles ({}): {}", e.kind(), e);
                self.articles_load = LoadState::Failed;
            }
        }
        true
    }

    /// Sample the list container at `now`; hidden until the first load.
    ///
    pub fn screen_frame(&self, now: Millis) -> ScreenFrame {
        self.screen
            .map(|screen| screen.frame(now))
            .unwrap_or_else(ScreenFrame::hidden)
    }

    /// Sample one card at `now`.
    ///
    pub fn item_frame(&self, id: u64, now: Millis) -> ItemFrame {
        self.motion.frame(id, now)
    }

    // ---- Selection -----------------------------------------------------------

    /// Returns the index of the selected card.
    ///
    pub fn get_selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected article, if any.
    ///
    pub fn get_selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// Select the next card, wrapping around.
    ///
    pub fn next_article(&mut self) -> &mut Self {
        if !self.articles.is_empty() {
            self.selected = (self.selected + 1) % self.articles.len();
        }
        self
    }

    /// Select the previous card, wrapping around.
    ///
    pub fn previous_article(&mut self) -> &mut Self {
        if !self.articles.is_empty() {
            self.selected = if self.selected == 0 {
                self.articles.len() - 1
            } else {
                self.selected - 1
            };
        }
        self
    }

    /// Select the first card.
    ///
    pub fn first_article(&mut self) -> &mut Self {
        self.selected = 0;
        self
    }

    /// Select the last card.
    ///
    pub fn last_article(&mut self) -> &mut Self {
        self.selected = self.articles.len().saturating_sub(1);
        self
    }

    // ---- Favorites -----------------------------------------------------------

    /// Returns whether the article is a favorite.
    ///
    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(id)
    }

    /// Returns how many articles are favorites.
    ///
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Flip favorite membership of the article. Returns the new membership.
    ///
    pub fn toggle_favorite(&mut self, id: u64) -> bool {
        let favorite = self.favorites.toggle(id);
        debug!(
            "Article {} {} favorites.",
            id,
            if favorite { "added to" } else { "removed from" }
        );
        favorite
    }

    /// Toggle the favorite of the article in focus: the selected card, or the
    /// article shown in the detail view.
    ///
    pub fn toggle_current_favorite(&mut self) -> Option<bool> {
        let id = match self.current_view() {
            View::Articles => self.get_selected_article()?.id,
            View::Detail { post_id } => post_id,
        };
        Some(self.toggle_favorite(id))
    }

    // ---- Press feedback ------------------------------------------------------

    /// Returns the card currently held down.
    ///
    pub fn get_press(&self) -> Option<&Press> {
        self.press.as_ref()
    }

    /// Begin a keyboard press on the selected card. It is released, and the
    /// article opened, by the first tick at or after the hold time.
    ///
    pub fn press_selected(&mut self, now: Millis) -> &mut Self {
        if self.press.is_some() {
            return self;
        }
        if let Some(id) = self.get_selected_article().map(|a| a.id) {
            self.motion.press_in(id, now);
            self.press = Some(Press {
                id,
                source: PressSource::Key {
                    release_at: now + PRESS_HOLD_IN_MS,
                },
            });
        }
        self
    }

    /// Begin a pointer press on the card under the given cell.
    ///
    pub fn pointer_down(&mut self, column: u16, row: u16, now: Millis) -> &mut Self {
        if let Some(id) = self.card_at(column, row) {
            if let Some(previous) = self.press.take() {
                self.motion.press_out(previous.id, now);
            }
            if let Some(index) = self.articles.iter().position(|a| a.id == id) {
                self.selected = index;
            }
            self.motion.press_in(id, now);
            self.press = Some(Press {
                id,
                source: PressSource::Pointer,
            });
        }
        self
    }

    /// End a pointer press. Releasing over the pressed card opens it.
    ///
    pub fn pointer_up(&mut self, column: u16, row: u16, now: Millis) -> &mut Self {
        if let Some(press) = self.press.take() {
            self.motion.press_out(press.id, now);
            if press.source == PressSource::Pointer && self.card_at(column, row) == Some(press.id)
            {
                self.open_detail(press.id);
            }
        }
        self
    }

    /// Advance time-driven interaction: releases keyboard presses whose hold
    /// time has elapsed and opens their article.
    ///
    pub fn tick(&mut self, now: Millis) -> &mut Self {
        if let Some(Press {
            id,
            source: PressSource::Key { release_at },
        }) = self.press
        {
            if now >= release_at {
                self.press = None;
                self.motion.press_out(id, now);
                self.open_detail(id);
            }
        }
        self
    }

    /// Record where each card was drawn so pointer events can be mapped back
    /// to articles.
    ///
    pub fn set_card_regions(&mut self, regions: Vec<(u64, Rect)>) -> &mut Self {
        self.card_regions = regions;
        self
    }

    fn card_at(&self, column: u16, row: u16) -> Option<u64> {
        self.card_regions
            .iter()
            .find(|(_, area)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(id, _)| *id)
    }

    // ---- Detail view ---------------------------------------------------------

    /// Returns the detail view state.
    ///
    pub fn get_detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    /// Navigate to the detail view of the article with `post_id` and request
    /// its content, superseding any detail request still in flight.
    ///
    pub fn open_detail(&mut self, post_id: u64) -> &mut Self {
        info!("Opening article {}...", post_id);
        if self.current_view() != (View::Detail { post_id }) {
            self.view_stack.push(View::Detail { post_id });
        }
        self.load_detail(post_id);
        self
    }

    /// Request the content of the open detail view again.
    ///
    pub fn reload_detail(&mut self) -> &mut Self {
        if let View::Detail { post_id } = self.current_view() {
            self.load_detail(post_id);
        }
        self
    }

    fn load_detail(&mut self, post_id: u64) {
        let generation = self.detail_flight.supersede();
        let mut detail = DetailState::loading(post_id);
        if !self.dispatch(NetworkEvent::ArticleDetail {
            post_id,
            generation,
        }) {
            self.detail_flight.complete(generation);
            detail.fail();
        }
        self.detail = Some(detail);
    }

    /// Record the response to the detail request with `generation`. Returns
    /// false if the response was stale and ignored.
    ///
    pub fn apply_article_detail(
        &mut self,
        generation: u64,
        post_id: u64,
        result: ArticleDetail,
    ) -> bool {
        if !self.detail_flight.complete(generation) {
            warn!(
                "Dropping stale detail response for article {} (generation {}).",
                post_id, generation
            );
            return false;
        }
        match self.detail.as_mut() {
            Some(detail) if detail.post_id == post_id => {
                detail.apply(result);
                true
            }
            _ => false,
        }
    }

    /// Leave the detail view, dropping any response still in flight.
    ///
    pub fn close_detail(&mut self) -> &mut Self {
        if let View::Detail { .. } = self.current_view() {
            self.view_stack.pop();
            self.detail = None;
            self.detail_flight.abandon();
        }
        self
    }

    /// Scroll the detail view down by one line.
    ///
    pub fn scroll_detail_down(&mut self) -> &mut Self {
        if let Some(detail) = self.detail.as_mut() {
            detail.scroll = detail.scroll.saturating_add(1);
        }
        self
    }

    /// Scroll the detail view up by one line.
    ///
    pub fn scroll_detail_up(&mut self) -> &mut Self {
        if let Some(detail) = self.detail.as_mut() {
            detail.scroll = detail.scroll.saturating_sub(1);
        }
        self
    }

    /// Dispatch a network event. Returns false if it could not be sent.
    ///
    pub fn dispatch(&self, event: NetworkEvent) -> bool {
        match &self.net_sender {
            Some(net_sender) => match net_sender.send(event) {
                Ok(_) => true,
                Err(err) => {
                    error!("Received error from network dispatch: {}", err);
                    false
                }
            },
            None => {
                warn!("No network handler to dispatch '{:?}' to.", event);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::CommentThread;
    use crate::motion::Phase;
    use fake::{Fake, Faker};
    use std::sync::mpsc::{channel, Receiver};

    fn connected_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        (State::new(tx, Theme::default()), rx)
    }

    fn articles(ids: &[u64]) -> Vec<Article> {
        ids.iter()
            .map(|id| Article {
                id: *id,
                ..Faker.fake::<Article>()
            })
            .collect()
    }

    fn loaded_state(ids: &[u64], now: Millis) -> (State, Receiver<NetworkEvent>) {
        let (mut state, rx) = connected_state();
        let generation = state.request_articles().unwrap();
        assert!(state.apply_articles(generation, Ok(articles(ids)), now));
        (state, rx)
    }

    fn failure() -> FeedError {
        FeedError::Response {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn request_articles_dispatches_and_marks_loading() {
        let (mut state, rx) = connected_state();
        assert_eq!(state.get_articles_load(), LoadState::Idle);
        let generation = state.request_articles().unwrap();
        assert_eq!(state.get_articles_load(), LoadState::Loading);
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::Articles { generation: g }) if g == generation
        ));
    }

    #[test]
    fn request_without_network_fails() {
        let mut state = State::default();
        assert_eq!(state.request_articles(), None);
        assert_eq!(state.get_articles_load(), LoadState::Failed);
        // Not stuck in flight: the next request is attempted again.
        assert_eq!(state.request_articles(), None);
    }

    #[test]
    fn every_article_has_one_motion_entry() {
        let (state, _rx) = loaded_state(&[5, 9, 2, 11], 0);
        assert_eq!(state.get_motion().len(), state.get_articles().len());
        for article in state.get_articles() {
            assert!(state.get_motion().contains(article.id));
        }
        assert_eq!(state.get_articles_load(), LoadState::Loaded);
        assert!(state.get_loaded_at().is_some());
    }

    #[test]
    fn rapid_double_refresh_builds_one_cycle() {
        let (mut state, rx) = connected_state();
        let first = state.request_articles();
        let second = state.request_articles();
        assert!(first.is_some());
        assert_eq!(second, None);
        assert_eq!(rx.try_iter().count(), 1);

        assert!(state.apply_articles(first.unwrap(), Ok(articles(&[1, 2, 3])), 0));
        assert!(!state.apply_articles(first.unwrap(), Ok(articles(&[1, 2, 3])), 0));
        assert_eq!(state.get_motion().len(), 3);
        assert_eq!(state.get_articles().len(), 3);
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        let before = state.get_articles().to_vec();
        let generation = state.request_articles().unwrap();
        assert!(state.apply_articles(generation, Err(failure()), 2_000));
        assert_eq!(state.get_articles_load(), LoadState::Failed);
        assert_eq!(state.get_articles(), before.as_slice());
        assert_eq!(state.get_motion().len(), 2);
    }

    #[test]
    fn first_failure_leaves_screen_hidden() {
        let (mut state, _rx) = connected_state();
        let generation = state.request_articles().unwrap();
        state.apply_articles(generation, Err(failure()), 0);
        assert!(state.get_articles().is_empty());
        assert_eq!(state.screen_frame(5_000), ScreenFrame::hidden());
    }

    #[test]
    fn three_article_cascade_end_to_end() {
        let start = 1_000;
        let (state, _rx) = loaded_state(&[1, 2, 3], start);
        for (id, delay) in [(1, 100), (2, 180), (3, 260)] {
            assert_eq!(state.get_motion().get(id).unwrap().delay(), delay);
            assert_eq!(state.item_frame(id, start + delay - 1).phase, Phase::NotStarted);
            assert_eq!(state.item_frame(id, start + delay + 500).phase, Phase::Settled);
        }
        assert!(state.get_motion().is_settled(start + 760));
        assert_eq!(state.screen_frame(start + 600).opacity, 1.0);
    }

    #[test]
    fn refresh_restarts_cascade_for_known_ids() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        assert_eq!(state.item_frame(1, 10_000).phase, Phase::Settled);
        let generation = state.request_articles().unwrap();
        state.apply_articles(generation, Ok(articles(&[2, 1, 8])), 10_000);
        assert_eq!(state.get_motion().len(), 3);
        assert_eq!(state.item_frame(1, 10_000).phase, Phase::NotStarted);
        assert_eq!(state.get_motion().get(2).unwrap().delay(), 100);
        assert_eq!(state.get_motion().get(1).unwrap().delay(), 180);
        // The container was already visible and stays so.
        assert_eq!(state.screen_frame(10_000).opacity, 1.0);
    }

    #[test]
    fn favorites_survive_refresh() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        assert_eq!(state.toggle_current_favorite(), Some(true));
        let generation = state.request_articles().unwrap();
        state.apply_articles(generation, Ok(articles(&[3, 4])), 100);
        assert!(state.is_favorite(1));
        assert!(!state.is_favorite(3));
        assert!(!state.toggle_favorite(1));
        assert!(!state.is_favorite(1));
    }

    #[test]
    fn selection_wraps() {
        let (mut state, _rx) = loaded_state(&[1, 2, 3], 0);
        state.previous_article();
        assert_eq!(state.get_selected_index(), 2);
        state.next_article();
        assert_eq!(state.get_selected_index(), 0);
        state.last_article();
        assert_eq!(state.get_selected_article().unwrap().id, 3);
        state.first_article();
        assert_eq!(state.get_selected_article().unwrap().id, 1);
    }

    #[test]
    fn selection_clamped_when_list_shrinks() {
        let (mut state, _rx) = loaded_state(&[1, 2, 3], 0);
        state.last_article();
        let generation = state.request_articles().unwrap();
        state.apply_articles(generation, Ok(articles(&[4])), 100);
        assert_eq!(state.get_selected_index(), 0);
    }

    #[test]
    fn keyboard_press_releases_and_opens_detail() {
        let (mut state, rx) = loaded_state(&[1, 2], 0);
        rx.try_iter().count();
        state.next_article();
        state.press_selected(1_000);
        assert!(state.get_press().is_some());
        assert!(state.item_frame(2, 1_060).offset > 0.0);
        assert_eq!(state.item_frame(1, 1_060).offset, 0.0);

        state.tick(1_000 + PRESS_HOLD_IN_MS - 1);
        assert_eq!(state.current_view(), View::Articles);
        state.tick(1_000 + PRESS_HOLD_IN_MS);
        assert!(state.get_press().is_none());
        assert_eq!(state.current_view(), View::Detail { post_id: 2 });
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::ArticleDetail { post_id: 2, .. })
        ));
        assert_eq!(state.item_frame(2, 10_000).offset, 0.0);
    }

    #[test]
    fn keyboard_press_survives_refresh() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        let generation = state.request_articles().unwrap();
        state.press_selected(1_000);
        assert!(state.apply_articles(generation, Ok(articles(&[1, 2])), 1_050));
        assert!(state.get_press().is_some());
        assert_eq!(state.get_motion().get(1).unwrap().press.to, 5.0);

        state.tick(1_000 + PRESS_HOLD_IN_MS);
        assert_eq!(state.current_view(), View::Detail { post_id: 1 });
        assert!(state.get_press().is_none());
    }

    #[test]
    fn pointer_press_is_dropped_by_refresh() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        state.set_card_regions(vec![(1, Rect::new(0, 0, 40, 5))]);
        let generation = state.request_articles().unwrap();
        state.pointer_down(3, 1, 1_000);
        state.apply_articles(generation, Ok(articles(&[1, 2])), 1_050);
        assert!(state.get_press().is_none());
        state.pointer_up(3, 1, 1_100);
        assert_eq!(state.current_view(), View::Articles);
    }

    #[test]
    fn pointer_press_opens_card_under_release() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        state.set_card_regions(vec![
            (1, Rect::new(0, 0, 40, 5)),
            (2, Rect::new(0, 5, 40, 5)),
        ]);
        state.pointer_down(3, 6, 1_000);
        assert_eq!(state.get_selected_index(), 1);
        assert!(state.get_press().is_some());

        // Released elsewhere: springs back without navigating.
        state.pointer_up(3, 1, 1_050);
        assert_eq!(state.current_view(), View::Articles);

        state.pointer_down(3, 6, 2_000);
        state.pointer_up(3, 7, 2_080);
        assert_eq!(state.current_view(), View::Detail { post_id: 2 });
    }

    #[test]
    fn pointer_outside_cards_is_ignored() {
        let (mut state, _rx) = loaded_state(&[1], 0);
        state.set_card_regions(vec![(1, Rect::new(0, 0, 40, 5))]);
        state.pointer_down(60, 60, 0);
        assert!(state.get_press().is_none());
    }

    #[test]
    fn detail_response_applies_to_open_article() {
        let (mut state, rx) = loaded_state(&[1, 2], 0);
        rx.try_iter().count();
        state.open_detail(2);
        let generation = match rx.try_recv() {
            Ok(NetworkEvent::ArticleDetail { generation, .. }) => generation,
            other => panic!("unexpected event {:?}", other),
        };
        assert_eq!(state.get_detail().unwrap().status(), LoadState::Loading);
        let detail = ArticleDetail {
            article: Ok(articles(&[2]).remove(0)),
            comments: Ok(CommentThread {
                article_id: 2,
                items: vec![],
            }),
        };
        assert!(state.apply_article_detail(generation, 2, detail));
        assert_eq!(state.get_detail().unwrap().status(), LoadState::Loaded);
    }

    #[test]
    fn superseded_detail_response_is_dropped() {
        let (mut state, _rx) = loaded_state(&[1, 2], 0);
        state.open_detail(1);
        state.close_detail();
        state.open_detail(2);
        let stale = ArticleDetail {
            article: Ok(articles(&[1]).remove(0)),
            comments: Ok(CommentThread::default()),
        };
        assert!(!state.apply_article_detail(1, 1, stale));
        assert_eq!(state.get_detail().unwrap().post_id, 2);
        assert_eq!(state.get_detail().unwrap().status(), LoadState::Loading);
    }

    #[test]
    fn close_detail_returns_to_list() {
        let (mut state, _rx) = loaded_state(&[1], 0);
        state.open_detail(1);
        state.toggle_current_favorite();
        assert!(state.is_favorite(1));
        state.close_detail();
        assert_eq!(state.current_view(), View::Articles);
        assert!(state.get_detail().is_none());
        state.close_detail();
        assert_eq!(state.current_view(), View::Articles);
    }

    #[test]
    fn advance_spinner_index() {
        let mut state = State::default();
        state.advance_spinner_index();
        assert_eq!(state.spinner_index, 1);
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.spinner_index, 1);
    }
}
