//! Pipeline command and query handlers.
//!
//! Deal creation, stage moves, and the board view.

mod create_deal;
mod get_pipeline_board;
mod move_deal;

pub use create_deal::{CreateDealCommand, CreateDealHandler};
pub use get_pipeline_board::GetPipelineBoardHandler;
pub use move_deal::{MoveDealCommand, MoveDealHandler};
