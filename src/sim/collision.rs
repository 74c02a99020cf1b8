//! Actor versus tile collision
//!
//! Runs after an actor has integrated its move for the tick. Walls undo the
//! move (and bounce cars) so the actor never starts the next tick inside a
//! solid cell.

use super::body::Actor;
use super::grid::Grid;

/// What the resolver did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Actor is on a passable cell (or outside the grid)
    None,
    /// Actor hit a solid cell and was moved back
    Wall,
    /// Actor reached a goal cell; the caller resets the game
    Goal,
}

/// Resolve one actor against the grid
pub fn resolve<A: Actor + ?Sized>(actor: &mut A, grid: &Grid) -> Collision {
    let cell = grid.cell_for(actor.body().pos);

    if grid.is_goal(cell) {
        return Collision::Goal;
    }

    if grid.is_solid(cell) {
        // Back out of the wall before flipping direction, otherwise the next
        // tick starts inside it and may never get out
        actor.reverse_move();
        if let Some(bounce) = actor.bounce_factor() {
            let body = actor.body_mut();
            body.speed = bounce * -body.speed;
        }
        log::debug!("{} hit a wall at {:?}", actor.name(), cell);
        return Collision::Wall;
    }

    Collision::None
}
