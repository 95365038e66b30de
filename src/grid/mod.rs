//! The playing field: an `(size + 2) x (size + 2)` array of cell states whose
//! outermost ring is a fixed border.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colors::{BaseColor, Marker, MarkerKind, Rgb};
use crate::error::GameError;
use crate::types::Position;

/// grey used to paint the border ring
pub const BORDER_COLOR: Rgb = Rgb(100, 100, 100);

/// The state of a single grid cell
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// the outermost ring, never changes
    Border,
    /// unclaimed ground
    Empty,
    /// an actor's current position
    Head(BaseColor),
    /// a cell laid by an actor's current run
    Trail(BaseColor),
    /// owned ground
    Territory(BaseColor),
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

impl CellState {
    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    #[allow(missing_docs)]
    pub fn is_border(&self) -> bool {
        matches!(self, CellState::Border)
    }

    /// the marker painted on this cell, if it belongs to an actor
    pub fn marker(&self) -> Option<Marker> {
        match *self {
            CellState::Head(base) => Some(base.derive(MarkerKind::Head)),
            CellState::Trail(base) => Some(base.derive(MarkerKind::Trail)),
            CellState::Territory(base) => Some(base.derive(MarkerKind::Territory)),
            CellState::Border | CellState::Empty => None,
        }
    }

    /// the base color of the actor this cell belongs to
    pub fn owner(&self) -> Option<BaseColor> {
        self.marker().map(|m| m.base)
    }

    /// the color a renderer should fill this cell with, `None` for empty ground
    pub fn display_color(&self) -> Option<Rgb> {
        match self {
            CellState::Border => Some(BORDER_COLOR),
            CellState::Empty => None,
            _ => self.marker().map(crate::colors::to_display_color),
        }
    }

    fn glyph(&self) -> char {
        match self {
            CellState::Border => '#',
            CellState::Empty => '.',
            CellState::Head(base) => base_glyph(*base).to_ascii_uppercase(),
            CellState::Trail(_) => '+',
            CellState::Territory(base) => base_glyph(*base),
        }
    }
}

fn base_glyph(base: BaseColor) -> char {
    match base {
        BaseColor::Red => 'r',
        BaseColor::Yellow => 'y',
        BaseColor::Green => 'g',
        BaseColor::Brown => 'b',
        BaseColor::Purple => 'p',
        BaseColor::Blue => 'u',
    }
}

/// The grid. Shape is fixed at creation, contents are mutable except for the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u16,
    cells: Vec<CellState>,
}

impl Grid {
    /// creates a grid with a `size x size` interior of empty cells, surrounded by border
    pub fn new(size: u16) -> Self {
        let width = size as usize + 2;
        let mut cells = vec![CellState::Empty; width * width];
        for y in 0..width {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == width - 1 {
                    cells[y * width + x] = CellState::Border;
                }
            }
        }
        Grid { size, cells }
    }

    /// the interior dimension
    pub fn size(&self) -> u16 {
        self.size
    }

    /// the full dimension, border included
    pub fn width(&self) -> i32 {
        self.size as i32 + 2
    }

    /// is this position anywhere in the allocated field, border included
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.width()
    }

    /// is this position on the border ring
    pub fn on_border(&self, pos: Position) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0 || pos.y == 0 || pos.x == self.width() - 1 || pos.y == self.width() - 1)
    }

    /// is this position strictly inside the border
    pub fn is_interior(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.on_border(pos)
    }

    /// is this an interior position with the border ring as a direct neighbour
    pub fn touches_border(&self, pos: Position) -> bool {
        let last = self.size as i32;
        self.is_interior(pos) && (pos.x == 1 || pos.y == 1 || pos.x == last || pos.y == last)
    }

    fn index(&self, pos: Position) -> Result<usize, GameError> {
        if !self.in_bounds(pos) {
            return Err(GameError::OutOfBounds { position: pos });
        }
        Ok((pos.y * self.width() + pos.x) as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        let width = self.width() as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    /// the state at a position. the border ring is readable
    pub fn read(&self, pos: Position) -> Result<CellState, GameError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx])
    }

    /// writes a state to an interior position. border positions, and the `Border`
    /// state itself, are rejected
    pub fn write(&mut self, pos: Position, state: CellState) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        if self.cells[idx].is_border() || state.is_border() {
            return Err(GameError::BorderWrite { position: pos });
        }
        self.cells[idx] = state;
        Ok(())
    }

    /// writes anywhere, border included
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, pos: Position, state: CellState) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// counts the cells matching the predicate, border included
    pub fn count(&self, predicate: impl Fn(&CellState) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(*c)).count()
    }

    /// every position whose state matches the predicate, row major
    pub fn positions_where<'a>(
        &'a self,
        predicate: impl Fn(&CellState) -> bool + 'a,
    ) -> impl Iterator<Item = Position> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| predicate(*c))
            .map(move |(idx, _)| self.position_of(idx))
    }

    /// all interior positions, row major
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> {
        let last = self.size as i32;
        (1..=last).flat_map(move |y| (1..=last).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        let width = self.width() as usize;
        for row in self.cells.chunks(width) {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_shape() {
        let grid = Grid::new(10);
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.count(|c| c.is_border()), 12 * 4 - 4);
        assert_eq!(grid.count(|c| c.is_empty()), 100);
        assert_eq!(grid.read(Position::new(0, 0)).unwrap(), CellState::Border);
        assert_eq!(grid.read(Position::new(11, 5)).unwrap(), CellState::Border);
        assert_eq!(grid.read(Position::new(1, 1)).unwrap(), CellState::Empty);
        assert_eq!(grid.read(Position::new(10, 10)).unwrap(), CellState::Empty);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut grid = Grid::new(3);
        assert!(matches!(
            grid.read(Position::new(-1, 2)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.read(Position::new(2, 5)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.write(Position::new(5, 0), CellState::Empty),
            Err(GameError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_border_is_not_writable() {
        let mut grid = Grid::new(3);
        assert!(matches!(
            grid.write(Position::new(0, 2), CellState::Territory(BaseColor::Red)),
            Err(GameError::BorderWrite { .. })
        ));
        assert!(matches!(
            grid.write(Position::new(2, 2), CellState::Border),
            Err(GameError::BorderWrite { .. })
        ));
        assert_eq!(grid.read(Position::new(0, 2)).unwrap(), CellState::Border);
        assert_eq!(grid.read(Position::new(2, 2)).unwrap(), CellState::Empty);
    }

    #[test]
    fn test_write_and_count() {
        let mut grid = Grid::new(4);
        grid.write(Position::new(1, 1), CellState::Trail(BaseColor::Blue))
            .unwrap();
        grid.write(Position::new(2, 1), CellState::Trail(BaseColor::Blue))
            .unwrap();
        grid.write(Position::new(3, 3), CellState::Head(BaseColor::Red))
            .unwrap();
        assert_eq!(
            grid.count(|c| *c == CellState::Trail(BaseColor::Blue)),
            2
        );
        let trail = grid
            .positions_where(|c| matches!(c, CellState::Trail(_)))
            .collect::<Vec<_>>();
        assert_eq!(trail, vec![Position::new(1, 1), Position::new(2, 1)]);
        eprintln!("{}", grid);
    }

    #[test]
    fn test_position_classification() {
        let grid = Grid::new(4);
        assert!(grid.on_border(Position::new(0, 3)));
        assert!(!grid.on_border(Position::new(7, 3)));
        assert!(grid.touches_border(Position::new(1, 3)));
        assert!(grid.touches_border(Position::new(4, 2)));
        assert!(!grid.touches_border(Position::new(2, 2)));
        assert_eq!(grid.interior_positions().count(), 16);
    }

    #[test]
    fn test_display_colors() {
        assert_eq!(CellState::Border.display_color(), Some(BORDER_COLOR));
        assert_eq!(CellState::Empty.display_color(), None);
        assert_eq!(
            CellState::Territory(BaseColor::Red).display_color(),
            Some(Rgb(255, 0, 0))
        );
        assert_eq!(
            CellState::Head(BaseColor::Green).owner(),
            Some(BaseColor::Green)
        );
    }
}
