use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<CrosstermEvent>>,
    _tx: mpsc::Sender<Event<CrosstermEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(input) => {
                        if tx_clone.send(Event::Input(input)).is_err() {
                            break;
                        }
                    }
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event<CrosstermEvent>> {
        Ok(self.rx.recv()?)
    }

    /// Handle a terminal event accordingly. Returns true if should continue
    /// or false if exit was requested.
    ///
    pub fn handle(&self, state: &mut State, event: Event<CrosstermEvent>) -> bool {
        let now = state.now();
        match event {
            Event::Input(CrosstermEvent::Key(key)) => handle_key(state, key, now),
            Event::Input(CrosstermEvent::Mouse(mouse)) => {
                handle_mouse(state, mouse, now);
                true
            }
            Event::Input(_) => true,
            Event::Tick => {
                state.tick(now).advance_spinner_index();
                true
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a key event to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent, now: u64) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Char('l'), _) => {
            state.toggle_log();
        }
        (KeyCode::Char('f'), _) => {
            state.toggle_current_favorite();
        }
        _ => match state.current_view() {
            View::Articles => handle_list_key(state, key.code, now),
            View::Detail { .. } => handle_detail_key(state, key.code),
        },
    }
    true
}

fn handle_list_key(state: &mut State, code: KeyCode, now: u64) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_article();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_article();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.first_article();
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.last_article();
        }
        KeyCode::Enter => {
            state.press_selected(now);
        }
        KeyCode::Char('r') => {
            state.request_articles();
        }
        _ => (),
    }
}

fn handle_detail_key(state: &mut State, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            state.close_detail();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.scroll_detail_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.scroll_detail_up();
        }
        KeyCode::Char('r') => {
            state.reload_detail();
        }
        _ => (),
    }
}

/// Apply a mouse event to state.
///
pub fn handle_mouse(state: &mut State, mouse: MouseEvent, now: u64) {
    let in_list = state.current_view() == View::Articles;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if in_list => {
            state.pointer_down(mouse.column, mouse.row, now);
        }
        MouseEventKind::Up(MouseButton::Left) if in_list => {
            state.pointer_up(mouse.column, mouse.row, now);
        }
        MouseEventKind::ScrollDown if in_list => {
            state.next_article();
        }
        MouseEventKind::ScrollUp if in_list => {
            state.previous_article();
        }
        MouseEventKind::ScrollDown => {
            state.scroll_detail_down();
        }
        MouseEventKind::ScrollUp => {
            state.scroll_detail_up();
        }
        _ => (),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::state::LoadState;
    use crate::ui::Theme;
    use std::sync::mpsc::channel;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_request_exit() {
        let mut state = State::default();
        assert!(!handle_key(&mut state, press(KeyCode::Char('q')), 0));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            0
        ));
        assert!(handle_key(&mut state, press(KeyCode::Char('x')), 0));
    }

    #[test]
    fn refresh_key_is_single_flight() {
        let (tx, rx) = channel();
        let mut state = State::new(tx, Theme::default());
        handle_key(&mut state, press(KeyCode::Char('r')), 0);
        handle_key(&mut state, press(KeyCode::Char('r')), 10);
        assert_eq!(state.get_articles_load(), LoadState::Loading);
        let events: Vec<NetworkEvent> = rx.try_iter().collect();
        assert_eq!(events, vec![NetworkEvent::Articles { generation: 1 }]);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = State::default();
        let mut key = press(KeyCode::Char('l'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut state, key, 0);
        assert!(!state.is_log_visible());
        handle_key(&mut state, press(KeyCode::Char('l')), 0);
        assert!(state.is_log_visible());
    }

    #[test]
    fn escape_leaves_detail() {
        let (tx, _rx) = channel();
        let mut state = State::new(tx, Theme::default());
        state.open_detail(4);
        handle_key(&mut state, press(KeyCode::Char('f')), 0);
        assert!(state.is_favorite(4));
        handle_key(&mut state, press(KeyCode::Esc), 0);
        assert_eq!(state.current_view(), View::Articles);
    }
}
