//! Detection of empty pockets sealed off from the border.
//!
//! A pocket is a maximal 4-connected region of [CellState::Empty] cells. If any cell
//! of the region sits next to the border ring the region is open; otherwise it is
//! enclosed and gets claimed. The sweep is a breadth first search with an explicit
//! queue so that call depth never depends on grid area.
use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::cell_set::CellSet;
use crate::colors::BaseColor;
use crate::error::GameError;
use crate::grid::{CellState, Grid};
use crate::types::Position;

/// every enclosed empty region on the grid, each in discovery order
pub fn find_enclosures(grid: &Grid) -> Result<Vec<Vec<Position>>, GameError> {
    let width = grid.width() as usize;
    let mut visited = vec![false; width * width];
    let mut enclosed = vec![];
    let mut queue = VecDeque::new();

    for start in grid.interior_positions() {
        let start_idx = start.y as usize * width + start.x as usize;
        if visited[start_idx] || !grid.read(start)?.is_empty() {
            continue;
        }

        visited[start_idx] = true;
        queue.push_back(start);
        let mut region = vec![];
        let mut open = false;

        while let Some(pos) = queue.pop_front() {
            region.push(pos);
            if grid.touches_border(pos) {
                // keep draining so the whole region is marked visited
                open = true;
            }
            for next in pos.neighbors() {
                if !grid.is_interior(next) {
                    continue;
                }
                let idx = next.y as usize * width + next.x as usize;
                if visited[idx] || !grid.read(next)?.is_empty() {
                    continue;
                }
                visited[idx] = true;
                queue.push_back(next);
            }
        }

        if !open {
            enclosed.push(region);
        }
    }

    Ok(enclosed)
}

/// claims every enclosed empty region for `color`, returning how many cells were filled
#[instrument(level = "trace", skip_all)]
pub fn fill_enclosures(
    grid: &mut Grid,
    color: BaseColor,
    territory: &mut CellSet,
) -> Result<usize, GameError> {
    let regions = find_enclosures(grid)?;
    let mut filled = 0;
    for region in regions.iter() {
        for pos in region {
            grid.write(*pos, CellState::Territory(color))?;
            territory.insert(*pos);
            filled += 1;
        }
    }
    if filled > 0 {
        debug!(?color, regions = regions.len(), filled, "filled enclosures");
    }
    Ok(filled)
}
