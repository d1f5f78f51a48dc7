use std::collections::VecDeque;

use tracing::trace;

pub use builder::{Builder, BuilderError};
pub use segment_dirs::segment_dirs;

use crate::basic::{Cell, Dir, GridDim};

mod builder;
mod segment_dirs;

/// Ticks per second when nothing else is configured
pub const DEFAULT_SPEED: u64 = 9;

/// Outcome of [`Snake::advance`]
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Advance {
    Alive,
    /// The new head would have landed on the body,
    /// the snake was left where it was
    Dead,
}

/// Milliseconds on a monotonic clock
pub type Millis = u64;

/// Simulation state of the serpent
///
/// `length` is the target length, the tail is only popped when the body is
/// longer than that, so a [`Snake::grow`] becomes visible one tick later
/// as a segment that was not removed
#[derive(Clone, Debug)]
pub struct Snake {
    /// Head at the front, tail at the back
    cells: VecDeque<Cell>,
    /// Direction used on the most recent tick
    dir: Dir,
    /// Applied at the next tick
    queued: Dir,
    length: usize,
    score: u32,
    last_tick: Millis,
    tick_period: Millis,
    allow_cross_self: bool,
    dim: GridDim,
    /// Number of ticks executed so far
    ticks: u64,
}

impl Snake {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &VecDeque<Cell> {
        &self.cells
    }

    #[cfg(test)]
    pub fn visible_len(&self) -> usize {
        self.cells.len()
    }

    /// Target length, may exceed the number of drawn segments right after growing
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    #[cfg(test)]
    pub fn queued(&self) -> Dir {
        self.queued
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn last_tick(&self) -> Millis {
        self.last_tick
    }

    #[cfg(test)]
    pub fn tick_period(&self) -> Millis {
        self.tick_period
    }

    #[cfg(test)]
    pub fn allow_cross_self(&self) -> bool {
        self.allow_cross_self
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    /// Growths that have not yet shown up as a segment
    #[cfg(test)]
    pub fn pending_growth(&self) -> usize {
        self.length.saturating_sub(self.cells.len())
    }

    #[cfg(test)]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.iter().any(|c| *c == cell)
    }

    /// Record a direction intent, it is applied at the next tick
    ///
    /// Intents are dropped when a previous one is still pending (two quick
    /// turns would otherwise compose into a reversal) and when they reverse
    /// a snake longer than one cell
    pub fn queue_dir(&mut self, intent: Dir) {
        if self.dir != self.queued {
            trace!("dropped {:?}, {:?} still pending", intent, self.queued);
            return;
        }
        if self.cells.len() > 1 && intent == -self.dir {
            trace!("dropped reversal {:?} -> {:?}", self.dir, intent);
            return;
        }
        self.queued = intent;
    }

    /// Move one cell if a full tick period has passed since the last tick
    pub fn advance(&mut self, now: Millis) -> Advance {
        debug_assert!(now >= self.last_tick, "clock went backwards");
        if now.saturating_sub(self.last_tick) < self.tick_period {
            return Advance::Alive;
        }

        self.dir = self.queued;
        let new_head = self.head().wrapping_translate(self.dir, 1, self.dim);

        if !self.allow_cross_self
            && self.length > 2
            && self.cells.iter().skip(1).any(|cell| *cell == new_head)
        {
            return Advance::Dead;
        }

        self.cells.push_front(new_head);
        if self.cells.len() > self.length {
            self.cells.pop_back();
        }

        self.last_tick = now;
        self.ticks += 1;
        Advance::Alive
    }

    pub fn grow(&mut self, points: u32) {
        self.length += 1;
        self.score += points;
    }

    /// Shift the tick clock forward, used when resuming after a pause so
    /// that the paused time does not trigger catch-up ticks
    pub fn rebase(&mut self, paused_for: Millis) {
        self.last_tick += paused_for;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::prelude::*;

    const DIM: GridDim = GridDim { cols: 40, rows: 30 };

    fn snake(cells: &[(i32, i32)], dir: Dir, period: Millis) -> Snake {
        Snake::builder()
            .cells(cells.iter().map(|&(c, r)| Cell::new(c, r)).collect())
            .dir(dir)
            .tick_period(period)
            .dim(DIM)
            .build()
            .unwrap()
    }

    fn cells(snake: &Snake) -> Vec<(i32, i32)> {
        snake.cells().iter().map(|c| (c.col, c.row)).collect()
    }

    #[test]
    fn test_basic_growth() {
        let mut s = snake(&[(20, 15)], Dir::R, 111);
        assert_eq!(s.advance(0), Advance::Alive);
        assert_eq!(cells(&s), [(20, 15)]);
        assert_eq!(s.advance(120), Advance::Alive);
        assert_eq!(cells(&s), [(21, 15)]);

        s.grow(10);
        assert_eq!(s.pending_growth(), 1);
        assert_eq!(s.advance(240), Advance::Alive);
        assert_eq!(cells(&s), [(22, 15), (21, 15)]);
        assert_eq!(s.length(), 2);
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn test_no_tick_before_period() {
        let mut s = snake(&[(5, 5)], Dir::D, 100);
        assert_eq!(s.advance(99), Advance::Alive);
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.advance(100), Advance::Alive);
        assert_eq!(s.ticks(), 1);
        assert_eq!(s.head(), Cell::new(5, 6));
        assert_eq!(s.last_tick(), 100);
    }

    #[test]
    fn test_wrap_into_body_is_fatal() {
        let mut s = snake(&[(0, 0), (39, 0), (38, 0)], Dir::L, 100);
        assert_eq!(s.advance(100), Advance::Dead);
        // nothing moved
        assert_eq!(cells(&s), [(0, 0), (39, 0), (38, 0)]);
    }

    #[test]
    fn test_cross_self_allowed() {
        let mut s = Snake::builder()
            .cells(vec![Cell::new(0, 0), Cell::new(39, 0), Cell::new(38, 0)])
            .dir(Dir::L)
            .tick_period(100)
            .dim(DIM)
            .allow_cross_self(true)
            .build()
            .unwrap();
        assert_eq!(s.advance(100), Advance::Alive);
        assert_eq!(cells(&s), [(39, 0), (0, 0), (39, 0)]);
    }

    #[test]
    fn test_queued_illegal_reversal() {
        let mut s = snake(&[(10, 10), (9, 10), (8, 10), (7, 10)], Dir::R, 100);
        s.queue_dir(Dir::L);
        assert_eq!(s.queued(), Dir::R);

        s.queue_dir(Dir::D);
        s.queue_dir(Dir::U);
        assert_eq!(s.queued(), Dir::D);

        assert_eq!(s.advance(100), Advance::Alive);
        assert_eq!(s.head(), Cell::new(10, 11));
        assert_eq!(s.dir(), Dir::D);
    }

    #[test]
    fn test_single_cell_may_reverse() {
        let mut s = snake(&[(3, 3)], Dir::R, 10);
        s.queue_dir(Dir::L);
        assert_eq!(s.queued(), Dir::L);
        assert_eq!(s.advance(10), Advance::Alive);
        assert_eq!(s.head(), Cell::new(2, 3));
    }

    #[test]
    fn test_repeated_intent_is_idempotent() {
        let mut a = snake(&[(3, 3), (2, 3)], Dir::R, 10);
        let mut b = a.clone();
        a.queue_dir(Dir::U);
        b.queue_dir(Dir::U);
        b.queue_dir(Dir::U);
        b.queue_dir(Dir::U);
        assert_eq!(a.advance(10), b.advance(10));
        assert_eq!(cells(&a), cells(&b));
    }

    #[test]
    fn test_rebase_prevents_catch_up() {
        let mut s = snake(&[(3, 3)], Dir::R, 100);
        assert_eq!(s.advance(100), Advance::Alive);
        // paused from 150 to 1150
        s.rebase(1000);
        assert_eq!(s.advance(1150), Advance::Alive);
        assert_eq!(s.ticks(), 1);
        assert_eq!(s.advance(1200), Advance::Alive);
        assert_eq!(s.ticks(), 2);
    }

    // random walks checking the quantified invariants
    #[test]
    fn test_random_walk_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut s = snake(&[(20, 15)], Dir::R, 10);
            let mut now = 0;
            let mut prev_dir = s.dir();
            for _ in 0..300 {
                for _ in 0..rng.gen_range(0..3) {
                    s.queue_dir(Dir::from(rng.gen_range(0..4u8)));
                }
                if rng.gen_bool(0.2) {
                    s.grow(1);
                }
                let len_before = s.visible_len();
                now += 10;
                if s.advance(now) == Advance::Dead {
                    break;
                }

                assert!(s.cells().iter().all(|c| DIM.contains(*c)));
                assert!(s.visible_len() <= s.length());
                if len_before >= 2 {
                    assert!(!s.dir().is_reverse_of(prev_dir));
                }
                if s.visible_len() > 2 {
                    assert!(s.cells().iter().all_unique());
                }
                prev_dir = s.dir();
            }
        }
    }
}
