use std::collections::VecDeque;
use std::error;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use tracing::debug;

use super::{Millis, Snake, DEFAULT_SPEED};
use crate::basic::{Cell, Dir, GridDim};

#[derive(Debug)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

impl error::Error for BuilderError {}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub cells: Option<Vec<Cell>>,
    pub dir: Option<Dir>,
    pub length: Option<usize>,
    pub tick_period: Option<Millis>,
    pub allow_cross_self: bool,
    pub dim: Option<GridDim>,
}

impl Builder {
    #[cfg(test)]
    #[inline(always)]
    #[must_use]
    pub fn cells(mut self, value: Vec<Cell>) -> Self {
        self.cells = Some(value);
        self
    }

    /// A single-cell snake in the middle of the board, the usual start
    #[inline(always)]
    #[must_use]
    pub fn centered(mut self, dim: GridDim) -> Self {
        self.cells = Some(vec![dim.center()]);
        self.dim = Some(dim);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[cfg(test)]
    #[inline(always)]
    #[must_use]
    pub fn length(mut self, value: usize) -> Self {
        self.length = Some(value);
        self
    }

    #[cfg(test)]
    #[inline(always)]
    #[must_use]
    pub fn tick_period(mut self, value: Millis) -> Self {
        self.tick_period = Some(value);
        self
    }

    /// Tick period derived from a number of ticks per second
    #[inline(always)]
    #[must_use]
    pub fn speed(mut self, ticks_per_second: u64) -> Self {
        self.tick_period = Some(1000 / ticks_per_second.max(1));
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn allow_cross_self(mut self, value: bool) -> Self {
        self.allow_cross_self = value;
        self
    }

    #[cfg(test)]
    #[inline(always)]
    #[must_use]
    pub fn dim(mut self, value: GridDim) -> Self {
        self.dim = Some(value);
        self
    }

    fn error(&self, message: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), message)
    }

    pub fn build(&self) -> Result<Snake, BuilderError> {
        let dim = self.dim.ok_or_else(|| self.error("missing field `dim`"))?;
        let cells = self
            .cells
            .clone()
            .ok_or_else(|| self.error("missing field `cells`"))?;
        if cells.is_empty() {
            return Err(self.error("a snake needs at least one cell"));
        }
        if !cells.iter().all(|cell| dim.contains(*cell)) {
            return Err(self.error("cell outside of the board"));
        }
        if !self.allow_cross_self && !cells.iter().all_unique() {
            return Err(self.error("overlapping cells"));
        }

        let length = self.length.unwrap_or(cells.len());
        if length < cells.len() {
            return Err(self.error("length shorter than the body"));
        }

        let tick_period = self.tick_period.unwrap_or(1000 / DEFAULT_SPEED);
        if tick_period == 0 {
            return Err(self.error("tick period must be positive"));
        }

        let dir = self.dir.unwrap_or(Dir::R);
        debug!("spawn snake at {:?} going {:?}", cells[0], dir);

        Ok(Snake {
            cells: VecDeque::from(cells),
            dir,
            queued: dir,
            length,
            score: 0,
            last_tick: 0,
            tick_period,
            allow_cross_self: self.allow_cross_self,
            dim,
            ticks: 0,
        })
    }
}

#[test]
fn test_builder_defaults() {
    let dim = GridDim { cols: 40, rows: 30 };
    let snake = Builder::default().centered(dim).build().unwrap();
    assert_eq!(snake.head(), Cell::new(20, 15));
    assert_eq!(snake.dir(), Dir::R);
    assert_eq!(snake.length(), 1);
    assert_eq!(snake.tick_period(), 111);
}

#[test]
fn test_builder_rejects_bad_input() {
    let dim = GridDim { cols: 4, rows: 4 };
    assert!(Builder::default().dim(dim).build().is_err());
    assert!(Builder::default().dim(dim).cells(vec![]).build().is_err());
    assert!(Builder::default().dim(dim).cells(vec![Cell::new(4, 0)]).build().is_err());
    let twice = vec![Cell::new(1, 1), Cell::new(1, 1)];
    assert!(Builder::default().dim(dim).cells(twice.clone()).build().is_err());
    assert!(Builder::default()
        .dim(dim)
        .cells(twice)
        .allow_cross_self(true)
        .build()
        .is_ok());
    assert!(Builder::default()
        .centered(dim)
        .tick_period(0)
        .build()
        .is_err());
}
