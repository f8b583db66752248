// ABOUTME: Cursor movement clamped to the screen holding the cursor.
// ABOUTME: Produces flipped (top-left origin) points for synthetic pointer events.

use crate::geometry::{Point, Rect};

/// Distance kept from a screen's max edges when a move is clamped (1/512)
pub const EDGE_INSET: f64 = 0.01953125;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("No screen contains the cursor at ({x}, {y})")]
pub struct NoScreenError {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to post pointer event: {0}")]
pub struct PostError(pub String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CursorError {
    #[error(transparent)]
    NoScreen(#[from] NoScreenError),

    #[error(transparent)]
    Post(#[from] PostError),
}

/// Receiver of synthetic pointer-move events, in flipped coordinates.
pub trait PointerSink {
    fn post_mouse_moved(&mut self, at: Point) -> Result<(), PostError>;
}

/// Move `current` by (`dx`, `dy`) and return the destination in flipped coordinates.
///
/// `dy` is positive upward. A destination that lands on any screen is kept
/// as is; one that lands on no screen is clamped into the screen holding
/// `current`, staying [`EDGE_INSET`] short of its max edges. The first
/// screen is the one the result is flipped against.
pub fn clamped_move(
    current: Point,
    dx: f64,
    dy: f64,
    screens: &[Rect],
) -> Result<Point, NoScreenError> {
    clamped_move_with_inset(current, dx, dy, screens, EDGE_INSET)
}

/// [`clamped_move`] with a caller-chosen inset from the max edges.
pub fn clamped_move_with_inset(
    current: Point,
    dx: f64,
    dy: f64,
    screens: &[Rect],
    inset: f64,
) -> Result<Point, NoScreenError> {
    let no_screen = NoScreenError {
        x: current.x,
        y: current.y,
    };
    let home = screens
        .iter()
        .find(|screen| screen.contains_point(current))
        .ok_or(no_screen)?;
    let output = screens.first().ok_or(no_screen)?;

    let mut target = current.offset(dx, dy);
    if !screens.iter().any(|screen| screen.contains_point(target)) {
        let clamped = Point::new(
            target.x.min(home.max_x() - inset).max(home.min_x()),
            target.y.min(home.max_y() - inset).max(home.min_y()),
        );
        tracing::debug!(
            "Clamped cursor target ({}, {}) to ({}, {})",
            target.x,
            target.y,
            clamped.x,
            clamped.y
        );
        target = clamped;
    }

    Ok(flip(target, output))
}

/// Convert a Y-up point to the top-left origin space of `screen`.
pub fn flip(point: Point, screen: &Rect) -> Point {
    Point::new(point.x, screen.max_y() - point.y)
}

/// Clamp a move and hand the result to `sink`. Returns the posted point.
pub fn move_cursor<S: PointerSink + ?Sized>(
    sink: &mut S,
    current: Point,
    dx: f64,
    dy: f64,
    screens: &[Rect],
) -> Result<Point, CursorError> {
    let destination = clamped_move(current, dx, dy, screens)?;
    sink.post_mouse_moved(destination)?;
    Ok(destination)
}
