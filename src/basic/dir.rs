use std::f32::consts::FRAC_PI_2;
use std::ops::{Add, Neg};

use crate::basic::Point;
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 4)
    }
}

impl Dir {
    // clockwise order starting from U
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Unit step in grid coordinates, rows grow downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        }
    }

    /// Inverse of [`Dir::delta`], the zero vector and diagonals have no direction
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(U),
            (1, 0) => Some(R),
            (0, 1) => Some(D),
            (-1, 0) => Some(L),
            _ => None,
        }
    }

    pub fn unit(self) -> Point {
        let (dx, dy) = self.delta();
        Point { x: dx as f32, y: dy as f32 }
    }

    /// `(-dy, dx)`, a quarter turn clockwise on screen
    pub fn perpendicular(self) -> Point {
        let (dx, dy) = self.delta();
        Point { x: -dy as f32, y: dx as f32 }
    }

    /// Clockwise distance from U in quarter turns
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Clockwise angle from U in radians
    pub fn clockwise_angle(self) -> f32 {
        self.quarter_turns() as f32 * FRAC_PI_2
    }

    #[cfg(test)]
    pub fn is_reverse_of(self, other: Self) -> bool {
        self == -other
    }
}

#[test]
fn test_dir_math() {
    for (dir, reverse) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, reverse);
        let (dx, dy) = dir.delta();
        assert_eq!(reverse.delta(), (-dx, -dy));
        assert_eq!(Dir::from_delta(dx, dy), Some(dir));
    }
    assert_eq!(Dir::from_delta(0, 0), None);
    assert_eq!(U + 5, R);
}

#[test]
fn test_perpendicular() {
    assert_eq!(U.perpendicular(), Point { x: 1., y: 0. });
    assert_eq!(R.perpendicular(), Point { x: 0., y: 1. });
}
