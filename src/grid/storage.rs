//! Lawn grid storage.
//!
//! A fixed `rows × cols` row-major array of [`Cell`]s. Dimensions never
//! change after creation. Queries are pure; cell content changes only
//! through agent placement and [`LawnGrid::relocate_agent`].

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellContent, GridCoord, GridDims, ObstacleKind};
use crate::error::{MowerError, Result};

/// Smallest grid that fits a one-cell fence around one lawn cell.
pub const MIN_GRID_SIDE: usize = 3;

/// Largest accepted side length, fence included.
pub const MAX_GRID_SIDE: usize = 1024;

/// Reject sides that cannot hold a fenced lawn or would not fit in memory.
pub fn check_grid_size(width: usize, height: usize) -> Result<()> {
    if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
        return Err(MowerError::DegenerateGrid { width, height });
    }
    if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
        return Err(MowerError::OversizedGrid {
            width,
            height,
            max: MAX_GRID_SIDE,
        });
    }
    Ok(())
}

/// Statistics for each cell content kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Grass cells not yet mowed
    pub unmowed: usize,
    /// Grass cells already mowed
    pub mowed: usize,
    /// Cell under the mower (0 or 1)
    pub occupied: usize,
    /// Stone and tree cells
    pub obstacles: usize,
    /// Fence cells
    pub fence: usize,
}

impl CellCounts {
    /// All grass cells, mowed or not, including the mower's own
    pub fn grass(&self) -> usize {
        self.unmowed + self.mowed + self.occupied
    }
}

/// Fixed-size lawn grid.
#[derive(Clone, Debug)]
pub struct LawnGrid {
    dims: GridDims,
    cells: Vec<Cell>,
}

impl LawnGrid {
    /// Create a fenced lawn: fence border, unmowed grass inside.
    pub fn fenced(width: usize, height: usize) -> Result<Self> {
        check_grid_size(width, height)?;

        let dims = GridDims::new(height, width);
        let mut cells = vec![Cell::grass(); dims.cell_count()];
        for row in 0..height {
            for col in 0..width {
                if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                    cells[row * width + col] = Cell::fence();
                }
            }
        }

        Ok(Self { dims, cells })
    }

    /// Parse a grid from text rows.
    ///
    /// `H` fence, `W` or `.` unmowed grass, `v` mowed grass, `O` stone,
    /// `T` tree. The border must be entirely fence.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        check_grid_size(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(MowerError::Config(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'H' => Cell::fence(),
                    'W' | '.' => Cell::grass(),
                    'v' => Cell::with_content(CellContent::Grass { mowed: true }),
                    'O' => Cell::obstacle(ObstacleKind::Stone),
                    'T' => Cell::obstacle(ObstacleKind::Tree),
                    other => {
                        return Err(MowerError::Config(format!(
                            "unknown cell '{}' at ({}, {})",
                            other, row, col
                        )));
                    }
                };
                let on_border = row == 0 || col == 0 || row == height - 1 || col == width - 1;
                if on_border != (cell.content == CellContent::Fence) {
                    return Err(MowerError::Config(format!(
                        "fence must form exactly the border, found '{}' at ({}, {})",
                        ch, row, col
                    )));
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            dims: GridDims::new(height, width),
            cells,
        })
    }

    /// Grid dimensions
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.dims.contains(coord) {
            Some(coord.row as usize * self.dims.cols + coord.col as usize)
        } else {
            None
        }
    }

    /// Get a cell (None if out of bounds)
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    #[inline]
    fn get_mut(&mut self, coord: GridCoord) -> Option<&mut Cell> {
        self.index(coord).map(|i| &mut self.cells[i])
    }

    /// Get a cell's content (None if out of bounds)
    #[inline]
    pub fn content(&self, coord: GridCoord) -> Option<CellContent> {
        self.get(coord).map(|c| c.content)
    }

    /// Can the mower drive onto this cell? Out of bounds is never mowable.
    #[inline]
    pub fn is_mowable(&self, coord: GridCoord) -> bool {
        self.get(coord).is_some_and(|c| c.is_mowable())
    }

    /// Is this unmowed grass?
    #[inline]
    pub fn is_unmowed_grass(&self, coord: GridCoord) -> bool {
        self.get(coord).is_some_and(|c| c.content.is_unmowed_grass())
    }

    /// The four cells directly adjacent to `coord` (N, E, S, W).
    ///
    /// Callers stay inside the fence, so these are always in bounds for
    /// any traversable `coord`.
    #[inline]
    pub fn neighbors_4(&self, coord: GridCoord) -> [GridCoord; 4] {
        coord.neighbors_4()
    }

    /// Iterate all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &Cell)> + '_ {
        let cols = self.dims.cols;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (GridCoord::new((i / cols) as i32, (i % cols) as i32), cell)
        })
    }

    /// Count cells by content
    pub fn count_by_content(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell.content {
                CellContent::Grass { mowed: false } => counts.unmowed += 1,
                CellContent::Grass { mowed: true } => counts.mowed += 1,
                CellContent::AgentOccupied => counts.occupied += 1,
                CellContent::Obstacle(_) => counts.obstacles += 1,
                CellContent::Fence => counts.fence += 1,
            }
        }
        counts
    }

    /// Full scan returning `(grass_total, obstacle_total)`.
    ///
    /// The mower's own cell counts as grass; the fence is not an obstacle.
    pub fn count_grass_and_obstacles(&self) -> (usize, usize) {
        let counts = self.count_by_content();
        (counts.grass(), counts.obstacles)
    }

    /// Number of cells currently flagged inaccessible
    pub fn inaccessible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.inaccessible).count()
    }

    /// All mowable cells in row-major order
    pub fn mowable_coords(&self) -> Vec<GridCoord> {
        self.iter()
            .filter(|(_, cell)| cell.is_mowable())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Overwrite an interior cell with an obstacle or grass during generation.
    pub(crate) fn set_interior(&mut self, coord: GridCoord, cell: Cell) {
        if let Some(slot) = self.get_mut(coord) {
            if slot.content != CellContent::Fence {
                *slot = cell;
            }
        }
    }

    /// Count one more tick spent chasing `coord`; returns the new count.
    pub fn record_attempt(&mut self, coord: GridCoord) -> u32 {
        match self.get_mut(coord) {
            Some(cell) => {
                cell.attempts = cell.attempts.saturating_add(1);
                cell.attempts
            }
            None => 0,
        }
    }

    /// Exclude `coord` from target selection until the mower reaches it.
    pub fn mark_inaccessible(&mut self, coord: GridCoord) {
        if let Some(cell) = self.get_mut(coord) {
            cell.inaccessible = true;
        }
    }

    /// Put the mower on a mowable cell.
    pub fn place_agent(&mut self, at: GridCoord) -> Result<()> {
        match self.get_mut(at) {
            Some(cell) if cell.is_mowable() => {
                *cell = Cell::with_content(CellContent::AgentOccupied);
                Ok(())
            }
            _ => Err(MowerError::StartNotMowable {
                row: at.row,
                col: at.col,
            }),
        }
    }

    /// Move the mower from `from` to an adjacent mowable `to`.
    ///
    /// The vacated cell becomes mowed grass. The destination loses its
    /// retry bookkeeping, which also clears any inaccessible flag.
    pub fn relocate_agent(&mut self, from: GridCoord, to: GridCoord) -> Result<()> {
        let legal = from.direction_to(&to).is_some()
            && self.content(from) == Some(CellContent::AgentOccupied)
            && self.is_mowable(to);
        if !legal {
            return Err(MowerError::IllegalMove { from, to });
        }

        if let Some(vacated) = self.get_mut(from) {
            *vacated = Cell::with_content(CellContent::Grass { mowed: true });
        }
        if let Some(arrived) = self.get_mut(to) {
            *arrived = Cell::with_content(CellContent::AgentOccupied);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_grid() {
        let grid = LawnGrid::fenced(5, 4).unwrap();
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 4);

        let counts = grid.count_by_content();
        assert_eq!(counts.fence, 14);
        assert_eq!(counts.unmowed, 6);
        assert_eq!(grid.count_grass_and_obstacles(), (6, 0));

        assert_eq!(grid.content(GridCoord::new(0, 2)), Some(CellContent::Fence));
        assert!(grid.is_mowable(GridCoord::new(1, 1)));
        assert!(!grid.is_mowable(GridCoord::new(3, 1)));
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        assert!(matches!(
            LawnGrid::fenced(2, 10),
            Err(MowerError::DegenerateGrid { width: 2, height: 10 })
        ));
        assert!(LawnGrid::fenced(10, 0).is_err());
        assert!(LawnGrid::fenced(3, 3).is_ok());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            LawnGrid::fenced(200_000, 200_000),
            Err(MowerError::OversizedGrid { max: MAX_GRID_SIDE, .. })
        ));
        assert!(LawnGrid::fenced(MAX_GRID_SIDE + 1, 10).is_err());
        assert!(LawnGrid::fenced(10, MAX_GRID_SIDE + 1).is_err());
        assert!(check_grid_size(MAX_GRID_SIDE, MAX_GRID_SIDE).is_ok());
    }

    #[test]
    fn test_from_rows() {
        let grid = LawnGrid::from_rows(&["HHHHH", "HWOWH", "HvTWH", "HHHHH"]).unwrap();
        assert_eq!(grid.dims(), GridDims::new(4, 5));
        assert_eq!(
            grid.content(GridCoord::new(1, 2)),
            Some(CellContent::Obstacle(ObstacleKind::Stone))
        );
        assert_eq!(
            grid.content(GridCoord::new(2, 1)),
            Some(CellContent::Grass { mowed: true })
        );
        assert_eq!(grid.count_grass_and_obstacles(), (4, 2));
    }

    #[test]
    fn test_from_rows_requires_fence_border() {
        assert!(LawnGrid::from_rows(&["HHH", "WWH", "HHH"]).is_err());
        assert!(LawnGrid::from_rows(&["HHHH", "HHWH", "HHHH"]).is_err());
        assert!(LawnGrid::from_rows(&["HHH", "HWH", "HH"]).is_err());
        assert!(LawnGrid::from_rows(&["HHH", "HxH", "HHH"]).is_err());
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let grid = LawnGrid::fenced(4, 4).unwrap();
        assert!(grid.get(GridCoord::new(-1, 0)).is_none());
        assert!(!grid.is_mowable(GridCoord::new(4, 1)));
        assert!(!grid.is_unmowed_grass(GridCoord::new(1, 9)));
    }

    #[test]
    fn test_iter_row_major() {
        let grid = LawnGrid::fenced(3, 3).unwrap();
        let coords: Vec<GridCoord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[0], GridCoord::new(0, 0));
        assert_eq!(coords[1], GridCoord::new(0, 1));
        assert_eq!(coords[3], GridCoord::new(1, 0));
        assert_eq!(grid.mowable_coords(), vec![GridCoord::new(1, 1)]);
    }

    #[test]
    fn test_place_and_relocate_agent() {
        let mut grid = LawnGrid::fenced(5, 5).unwrap();
        let start = GridCoord::new(1, 1);
        grid.place_agent(start).unwrap();
        assert_eq!(grid.content(start), Some(CellContent::AgentOccupied));
        assert_eq!(grid.count_grass_and_obstacles(), (9, 0));

        grid.relocate_agent(start, GridCoord::new(1, 2)).unwrap();
        assert_eq!(grid.content(start), Some(CellContent::Grass { mowed: true }));
        assert_eq!(
            grid.content(GridCoord::new(1, 2)),
            Some(CellContent::AgentOccupied)
        );

        let counts = grid.count_by_content();
        assert_eq!(counts.mowed, 1);
        assert_eq!(counts.occupied, 1);
        assert_eq!(counts.unmowed, 7);
    }

    #[test]
    fn test_place_agent_on_fence_rejected() {
        let mut grid = LawnGrid::fenced(5, 5).unwrap();
        assert!(matches!(
            grid.place_agent(GridCoord::new(0, 0)),
            Err(MowerError::StartNotMowable { row: 0, col: 0 })
        ));
        assert!(grid.place_agent(GridCoord::new(9, 9)).is_err());
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut grid = LawnGrid::from_rows(&["HHHHH", "HWOWH", "HWWWH", "HHHHH"]).unwrap();
        let start = GridCoord::new(1, 1);
        grid.place_agent(start).unwrap();

        // Diagonal
        assert!(grid.relocate_agent(start, GridCoord::new(2, 2)).is_err());
        // Onto fence
        assert!(grid.relocate_agent(start, GridCoord::new(0, 1)).is_err());
        // From a cell the mower is not on
        assert!(
            grid.relocate_agent(GridCoord::new(2, 1), GridCoord::new(2, 2))
                .is_err()
        );
        // Nothing changed
        assert_eq!(grid.content(start), Some(CellContent::AgentOccupied));
    }

    #[test]
    fn test_attempts_and_inaccessible() {
        let mut grid = LawnGrid::fenced(5, 5).unwrap();
        let target = GridCoord::new(3, 3);

        assert_eq!(grid.record_attempt(target), 1);
        assert_eq!(grid.record_attempt(target), 2);
        grid.mark_inaccessible(target);
        assert_eq!(grid.inaccessible_count(), 1);
        assert!(!grid.get(target).unwrap().is_target_candidate());

        // Reaching the cell clears its bookkeeping
        grid.place_agent(GridCoord::new(3, 2)).unwrap();
        grid.relocate_agent(GridCoord::new(3, 2), target).unwrap();
        assert_eq!(grid.inaccessible_count(), 0);
        assert_eq!(grid.get(target).unwrap().attempts, 0);
    }
}
