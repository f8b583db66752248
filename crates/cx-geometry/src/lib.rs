// ABOUTME: Geometry value types and cursor movement for cocoa-extended.
// ABOUTME: Exact-equality points and rects, containment, and screen-clamped cursor moves.

pub mod cursor;
pub mod geometry;

pub use cursor::{
    clamped_move, clamped_move_with_inset, flip, move_cursor, CursorError, NoScreenError,
    PointerSink, PostError, EDGE_INSET,
};
pub use geometry::{Point, Rect, Size};
