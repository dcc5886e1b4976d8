/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Zero-based public coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Position inside the bordered grid, where the playable area starts at `(1, 1)`.
pub(crate) type Pos = (usize, usize);

pub(crate) trait ToGridPos {
    fn to_grid_pos(self) -> Pos;
}

impl ToGridPos for Coord2 {
    fn to_grid_pos(self) -> Pos {
        (usize::from(self.0) + 1, usize::from(self.1) + 1)
    }
}

/// Converts a bordered grid position back to public coordinates.
///
/// Only valid for playable positions; border positions have no public counterpart.
pub(crate) fn to_coords((row, col): Pos) -> Coord2 {
    debug_assert!(row >= 1 && col >= 1);
    ((row - 1) as Coord, (col - 1) as Coord)
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub(crate) const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Offsets `pos` by `delta`.
///
/// Callers only pass playable positions, which always have a border cell on every side, so the
/// result stays inside the bordered grid without any bounds check.
pub(crate) fn offset((row, col): Pos, (dr, dc): (isize, isize)) -> Pos {
    (row.wrapping_add_signed(dr), col.wrapping_add_signed(dc))
}

/// Iterates the 8 bordered-grid neighbors of a playable position, border cells included.
pub(crate) fn grid_neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    DISPLACEMENTS.into_iter().map(move |delta| offset(pos, delta))
}

/// Iterates the in-bounds neighbors of a public coordinate, in row-major order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
