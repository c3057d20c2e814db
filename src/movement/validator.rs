//! Move validation against the action-point budget
//!
//! Range and cost use straight-line Manhattan distance. Only the destination
//! cell is checked for blocking; cells in between are never inspected.

use crate::core::error::MoveError;
use crate::core::types::GridPos;
use crate::grid::catalog::Grid;
use crate::grid::cell::GridCell;
use crate::units::delivery::DeliveryUnit;

/// AP cost of moving from `from` onto `target`
pub fn move_cost(from: GridPos, target: &GridCell) -> u32 {
    from.manhattan(&target.position)
        .saturating_mul(target.movement_cost)
}

/// Every destination the unit could reach this round, row-major
///
/// The scan window is clipped to the grid, so cost is bounded by grid area
/// no matter how large the AP budget is.
pub fn valid_moves(grid: &Grid, unit: &DeliveryUnit) -> Vec<GridPos> {
    let range = i64::from(unit.action_points);
    let origin = unit.position;
    let (x_min, x_max) = scan_span(origin.x, range, grid.width());
    let (y_min, y_max) = scan_span(origin.y, range, grid.height());
    let mut moves = Vec::new();

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let candidate = GridPos::new(x as i32, y as i32);
            if candidate == origin || origin.manhattan(&candidate) > unit.action_points {
                continue;
            }
            match grid.get_cell_at(candidate) {
                Some(cell) if !cell.blocks_movement => moves.push(candidate),
                _ => {}
            }
        }
    }

    moves
}

/// Inclusive `[center - range, center + range]` clipped to `[0, extent)`
fn scan_span(center: i32, range: i64, extent: u32) -> (i64, i64) {
    let upper = (i64::from(extent) - 1).min(i64::from(i32::MAX));
    let center = i64::from(center);
    ((center - range).max(0), (center + range).min(upper))
}

/// Check a move without touching the unit; returns the AP it would cost
pub fn validate_move(
    grid: &Grid,
    unit: &DeliveryUnit,
    target: GridPos,
) -> Result<u32, MoveError> {
    if !unit.can_act() {
        return Err(MoveError::AlreadyActed);
    }

    let cell = grid
        .get_cell_at(target)
        .ok_or(MoveError::InvalidPosition)?;

    if cell.blocks_movement {
        return Err(MoveError::PositionBlocked);
    }

    let cost = move_cost(unit.position, cell);
    if unit.action_points < cost {
        return Err(MoveError::NotEnoughActionPoints);
    }

    Ok(cost)
}

/// Commit a validated move
pub fn apply_move(unit: &mut DeliveryUnit, target: GridPos, cost: u32) {
    unit.position = target;
    unit.action_points -= cost;
    unit.has_acted = true;
}
