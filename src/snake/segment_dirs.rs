use crate::basic::{Cell, Dir};

/// Direction of travel of every segment, head first
///
/// The head uses the snake's direction, every other segment points at the
/// segment in front of it. A step longer than one cell along an axis can
/// only come from wrapping around the board, so that component is replaced
/// by a unit step the other way.
pub fn segment_dirs<'a>(cells: impl IntoIterator<Item = &'a Cell>, head_dir: Dir) -> Vec<Dir> {
    let mut dirs: Vec<Dir> = vec![];
    let mut prev: Option<Cell> = None;

    for &cell in cells {
        let dir = match prev {
            None => head_dir,
            Some(front) => {
                let d = front - cell;
                Dir::from_delta(unwrap_axis(d.col), unwrap_axis(d.row))
                    // boards one cell wide and overlapping cells give no step
                    .unwrap_or_else(|| *dirs.last().unwrap_or(&head_dir))
            }
        };
        dirs.push(dir);
        prev = Some(cell);
    }

    dirs
}

fn unwrap_axis(d: i32) -> i32 {
    if d.abs() > 1 {
        -d.signum()
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::GridDim;
    use Dir::*;

    fn dirs(cells: &[(i32, i32)], head_dir: Dir) -> Vec<Dir> {
        let cells: Vec<_> = cells.iter().map(|&(c, r)| Cell::new(c, r)).collect();
        segment_dirs(&cells, head_dir)
    }

    #[test]
    fn test_straight_body() {
        assert_eq!(dirs(&[(5, 5), (5, 6), (5, 7)], U), [U, U, U]);
        assert_eq!(dirs(&[(5, 5), (4, 5), (4, 4)], R), [R, R, D]);
    }

    #[test]
    fn test_wrap_compensation() {
        // travelling left across the seam
        assert_eq!(dirs(&[(39, 5), (0, 5), (1, 5)], L), [L, L, L]);
        // each body dir is the shortest wrapped step towards the cell ahead,
        // the head keeps the given direction
        assert_eq!(dirs(&[(0, 5), (39, 5), (38, 5)], L), [L, R, R]);
        // vertical seam
        assert_eq!(dirs(&[(3, 29), (3, 0), (3, 1)], U), [U, U, U]);
    }

    #[test]
    fn test_matches_shortest_wrapped_step() {
        let dim = GridDim { cols: 40, rows: 30 };
        let mut cells = vec![Cell::new(0, 0)];
        let path = [L, L, U, U, R, D, D, D, L];
        for dir in path.iter().rev() {
            let next = cells.last().unwrap().wrapping_translate(-*dir, 1, dim);
            cells.push(next);
        }
        let resolved = segment_dirs(&cells, L);
        for (i, pair) in cells.windows(2).enumerate() {
            let expected = Dir::iter()
                .find(|d| pair[1].wrapping_translate(*d, 1, dim) == pair[0])
                .unwrap();
            assert_eq!(resolved[i + 1], expected);
        }
    }
}
