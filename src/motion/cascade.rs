use super::{Easing, Millis, Phase, Spring, SpringConfig, Tween};
use log::*;
use std::collections::HashMap;

const SCREEN_DURATION: Millis = 600;
const SCREEN_INITIAL_SCALE: f64 = 0.95;

/// Scheduling constants for the entrance cascade and press feedback.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeTiming {
    pub base_delay: Millis,
    pub stride: Millis,
    pub duration: Millis,
    pub entrance_offset: f64,
    pub press_depth: f64,
    pub spring: SpringConfig,
}

impl Default for CascadeTiming {
    fn default() -> Self {
        CascadeTiming {
            base_delay: 100,
            stride: 80,
            duration: 500,
            entrance_offset: 20.0,
            press_depth: 5.0,
            spring: SpringConfig::default(),
        }
    }
}

impl CascadeTiming {
    /// Return the entrance delay of the item at list position `index`.
    ///
    pub fn delay(&self, index: usize) -> Millis {
        self.base_delay + index as Millis * self.stride
    }
}

/// Values to draw one card with.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub opacity: f64,
    /// Vertical displacement: remaining entrance rise plus press depression.
    pub offset: f64,
    pub phase: Phase,
}

impl Default for ItemFrame {
    /// Fully visible, no offset.
    fn default() -> Self {
        ItemFrame {
            opacity: 1.0,
            offset: 0.0,
            phase: Phase::Settled,
        }
    }
}

/// Animation record of a single article.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMotion {
    pub fade: Tween,
    pub rise: Tween,
    pub press: Spring,
}

impl ItemMotion {
    fn scheduled(timing: &CascadeTiming, index: usize, now: Millis) -> Self {
        let delay = timing.delay(index);
        ItemMotion {
            fade: Tween::new(0.0, 1.0, now, delay, timing.duration),
            rise: Tween::new(timing.entrance_offset, 0.0, now, delay, timing.duration),
            press: Spring::at_rest(timing.spring, 0.0, now),
        }
    }

    /// Entrance delay relative to the moment the table was built.
    ///
    pub fn delay(&self) -> Millis {
        self.fade.delay
    }

    /// Entrance phase at `now`.
    ///
    pub fn phase(&self, now: Millis) -> Phase {
        self.fade.phase(now)
    }

    /// Sample the record at `now`.
    ///
    pub fn frame(&self, now: Millis) -> ItemFrame {
        ItemFrame {
            opacity: self.fade.value(now),
            offset: self.rise.value(now) + self.press.value(now),
            phase: self.phase(now),
        }
    }
}

/// Per-article animation state for one load cycle, keyed by article id.
///
#[derive(Debug, Clone, Default)]
pub struct MotionTable {
    timing: CascadeTiming,
    items: HashMap<u64, ItemMotion>,
}

impl MotionTable {
    /// Return an empty table using the given timing.
    ///
    pub fn new(timing: CascadeTiming) -> Self {
        MotionTable {
            timing,
            items: HashMap::new(),
        }
    }

    /// Return a fresh table with one entrance scheduled per id, staggered in
    /// list order starting at `now`. Ids repeated in `ids` keep their first
    /// position.
    ///
    pub fn schedule(timing: CascadeTiming, ids: &[u64], now: Millis) -> Self {
        let mut items = HashMap::with_capacity(ids.len());
        for (index, id) in ids.iter().enumerate() {
            items
                .entry(*id)
                .or_insert_with(|| ItemMotion::scheduled(&timing, index, now));
        }
        debug!("Scheduled entrance cascade for {} articles.", items.len());
        MotionTable { timing, items }
    }

    /// Timing the table was scheduled with; the next cycle reuses it.
    ///
    pub fn timing(&self) -> &CascadeTiming {
        &self.timing
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Option<&ItemMotion> {
        self.items.get(&id)
    }

    /// Sample the record for `id`, or the resting frame if there is none.
    ///
    pub fn frame(&self, id: u64, now: Millis) -> ItemFrame {
        self.items
            .get(&id)
            .map(|item| item.frame(now))
            .unwrap_or_default()
    }

    /// Spring the item's press offset toward the press depth. Returns false
    /// if there is no record for `id`.
    ///
    pub fn press_in(&mut self, id: u64, now: Millis) -> bool {
        let depth = self.timing.press_depth;
        self.retarget_press(id, now, depth)
    }

    /// Spring the item's press offset back to rest. Returns false if there is
    /// no record for `id`.
    ///
    pub fn press_out(&mut self, id: u64, now: Millis) -> bool {
        self.retarget_press(id, now, 0.0)
    }

    fn retarget_press(&mut self, id: u64, now: Millis, target: f64) -> bool {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.press = item.press.retarget(now, target);
                true
            }
            None => {
                trace!("Ignoring press on article {} without motion record.", id);
                false
            }
        }
    }

    /// Return whether every entrance and press spring has come to rest.
    ///
    pub fn is_settled(&self, now: Millis) -> bool {
        self.items
            .values()
            .all(|item| item.phase(now) == Phase::Settled && item.press.is_settled(now))
    }
}

/// Values to draw the whole list container with.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFrame {
    pub opacity: f64,
    pub scale: f64,
}

impl ScreenFrame {
    /// Frame of a screen that has not yet been revealed.
    ///
    pub fn hidden() -> Self {
        ScreenFrame {
            opacity: 0.0,
            scale: SCREEN_INITIAL_SCALE,
        }
    }
}

/// Fade and scale-in of the whole list container.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEntrance {
    opacity: Tween,
    scale: Tween,
}

impl ScreenEntrance {
    /// Start the entrance at `now` from the frame currently on screen.
    ///
    pub fn begin(current: ScreenFrame, now: Millis) -> Self {
        ScreenEntrance {
            opacity: Tween::new(current.opacity, 1.0, now, 0, SCREEN_DURATION)
                .with_easing(Easing::OutCubic),
            scale: Tween::new(current.scale, 1.0, now, 0, SCREEN_DURATION)
                .with_easing(Easing::OutCubic),
        }
    }

    pub fn frame(&self, now: Millis) -> ScreenFrame {
        ScreenFrame {
            opacity: self.opacity.value(now),
            scale: self.scale.value(now),
        }
    }

    pub fn phase(&self, now: Millis) -> Phase {
        self.opacity.phase(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_by_stride() {
        let timing = CascadeTiming::default();
        for index in 0..19 {
            assert_eq!(timing.delay(index + 1) - timing.delay(index), timing.stride);
        }
    }

    #[test]
    fn three_articles_cascade_and_settle() {
        let start = 5_000;
        let table = MotionTable::schedule(CascadeTiming::default(), &[1, 2, 3], start);
        let delays: Vec<Millis> = [1, 2, 3]
            .iter()
            .map(|id| table.get(*id).unwrap().delay())
            .collect();
        assert_eq!(delays, vec![100, 180, 260]);

        for (id, delay) in [(1, 100), (2, 180), (3, 260)] {
            let item = table.get(id).unwrap();
            assert_eq!(item.phase(start + delay - 1), Phase::NotStarted);
            assert_eq!(item.phase(start + delay), Phase::Animating);
            assert_eq!(item.phase(start + delay + 499), Phase::Animating);
            assert_eq!(item.phase(start + delay + 500), Phase::Settled);
            let frame = table.frame(id, start + delay + 500);
            assert_eq!(frame.opacity, 1.0);
            assert_eq!(frame.offset, 0.0);
        }
        assert!(table.is_settled(start + 760));
        assert!(!table.is_settled(start + 759));
    }

    #[test]
    fn unscheduled_items_start_hidden_and_lowered() {
        let table = MotionTable::schedule(CascadeTiming::default(), &[7], 0);
        let frame = table.frame(7, 0);
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.offset, 20.0);
        assert_eq!(frame.phase, Phase::NotStarted);
    }

    #[test]
    fn unknown_id_reads_resting_frame() {
        let table = MotionTable::schedule(CascadeTiming::default(), &[1], 0);
        assert_eq!(table.frame(42, 0), ItemFrame::default());
    }

    #[test]
    fn duplicate_ids_keep_one_entry() {
        let table = MotionTable::schedule(CascadeTiming::default(), &[4, 5, 4], 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(4).unwrap().delay(), 100);
    }

    #[test]
    fn press_affects_only_target_item() {
        let mut table = MotionTable::schedule(CascadeTiming::default(), &[1, 2], 0);
        let settled = 1_000;
        assert!(table.press_in(1, settled));
        let pressed = table.frame(1, settled + 2_000);
        assert!((pressed.offset - 5.0).abs() < 1e-9);
        assert_eq!(table.frame(2, settled + 2_000).offset, 0.0);

        assert!(table.press_out(1, settled + 2_000));
        assert_eq!(table.frame(1, settled + 5_000).offset, 0.0);
    }

    #[test]
    fn press_out_interrupts_press_in() {
        let mut table = MotionTable::schedule(CascadeTiming::default(), &[1], 0);
        table.press_in(1, 1_000);
        let before = table.frame(1, 1_030).offset;
        assert!(before > 0.0 && before < 5.0);
        table.press_out(1, 1_030);
        assert!((table.frame(1, 1_030).offset - before).abs() < 1e-9);
        assert!(table.is_settled(5_000));
    }

    #[test]
    fn press_on_unknown_id_is_ignored() {
        let mut table = MotionTable::schedule(CascadeTiming::default(), &[1], 0);
        assert!(!table.press_in(9, 0));
        assert!(!table.press_out(9, 0));
        assert!(!table.contains(9));
    }

    #[test]
    fn screen_entrance_reveals_from_hidden() {
        let entrance = ScreenEntrance::begin(ScreenFrame::hidden(), 100);
        assert_eq!(entrance.frame(100), ScreenFrame::hidden());
        let middle = entrance.frame(400);
        assert!(middle.opacity > 0.5 && middle.opacity < 1.0);
        assert!(middle.scale > 0.95 && middle.scale < 1.0);
        assert_eq!(entrance.phase(700), Phase::Settled);
        assert_eq!(
            entrance.frame(700),
            ScreenFrame {
                opacity: 1.0,
                scale: 1.0
            }
        );
    }

    #[test]
    fn screen_entrance_from_visible_stays_visible() {
        let visible = ScreenFrame {
            opacity: 1.0,
            scale: 1.0,
        };
        let entrance = ScreenEntrance::begin(visible, 0);
        for now in (0..700).step_by(50) {
            assert_eq!(entrance.frame(now), visible);
        }
    }
}
