use serde::{Deserialize, Serialize};

/// Material held by a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CellType {
    #[default]
    Empty,
    Wall,
    Sand,
    Wood,
    Fire,
    SmokeDark,
    SmokeLight,
    Water,
    Ice,
}

impl CellType {
    pub const ALL: [CellType; 9] = [
        CellType::Empty,
        CellType::Wall,
        CellType::Sand,
        CellType::Wood,
        CellType::Fire,
        CellType::SmokeDark,
        CellType::SmokeLight,
        CellType::Water,
        CellType::Ice,
    ];

    /// Stable position of this variant inside `ALL`.
    pub fn ordinal(self) -> usize {
        match self {
            CellType::Empty => 0,
            CellType::Wall => 1,
            CellType::Sand => 2,
            CellType::Wood => 3,
            CellType::Fire => 4,
            CellType::SmokeDark => 5,
            CellType::SmokeLight => 6,
            CellType::Water => 7,
            CellType::Ice => 8,
        }
    }

    pub fn is_smoke(self) -> bool {
        matches!(self, CellType::SmokeDark | CellType::SmokeLight)
    }

    pub fn label(self) -> &'static str {
        match self {
            CellType::Empty => "Empty",
            CellType::Wall => "Wall",
            CellType::Sand => "Sand",
            CellType::Wood => "Wood",
            CellType::Fire => "Fire",
            CellType::SmokeDark => "Dark smoke",
            CellType::SmokeLight => "Light smoke",
            CellType::Water => "Water",
            CellType::Ice => "Ice",
        }
    }
}

/// Orthogonal neighbor offsets as `(d_row, d_col)`: up, down, left, right.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Dense `width * height` grid of cell tags, stored row-major.
///
/// Coordinates are `(row, col)`. Row 0 is the top of the world and rows grow
/// downward, which is the direction gravity pulls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    pub cells: Vec<CellType>,
    pub width: usize,
    pub height: usize,
}

impl CellGrid {
    /// All-empty grid with no wall ring.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![CellType::Empty; width * height],
            width,
            height,
        }
    }

    /// All-empty grid enclosed by a ring of walls.
    pub fn bordered(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        grid.enclose_with_walls();
        grid
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellType {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: CellType) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Resolves `(row + d_row, col + d_col)`, or `None` when it falls outside
    /// the grid.
    #[inline]
    pub fn offset(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
    ) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// Cell tag at an offset from `(row, col)`, `None` outside the grid.
    #[inline]
    pub fn get_offset(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<CellType> {
        self.offset(row, col, d_row, d_col)
            .map(|(r, c)| self.get(r, c))
    }

    /// True when any in-bounds orthogonal neighbor of `(row, col)` is `kind`.
    pub fn has_orthogonal(&self, row: usize, col: usize, kind: CellType) -> bool {
        ORTHOGONAL
            .iter()
            .any(|&(dr, dc)| self.get_offset(row, col, dr, dc) == Some(kind))
    }

    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }

    /// Overwrite the outer ring (first/last row and column) with walls.
    pub fn enclose_with_walls(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for col in 0..self.width {
            self.set(0, col, CellType::Wall);
            self.set(self.height - 1, col, CellType::Wall);
        }
        for row in 0..self.height {
            self.set(row, 0, CellType::Wall);
            self.set(row, self.width - 1, CellType::Wall);
        }
    }

    /// Iterator over the coordinates of the outer ring.
    pub fn border_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.is_border(row, col))
                .map(move |col| (row, col))
        })
    }

    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}
