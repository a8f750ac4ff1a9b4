//! Pipeline engine - deal stage state machine and board grouping.
//!
//! Five canonical stages, all mutually reachable; there is no terminal
//! state at this level. Unknown stage strings are never rejected: the board
//! buckets them under `qualified`, while the dashboard's per-stage summary
//! excludes them. The two fallback policies are intentionally different and
//! each is consumed by a different display surface.

mod board;
mod stage;

pub use board::{PipelineBoard, StageColumn};
pub use stage::Stage;
