//! Company intel command and query handlers.

mod get_analysis;
mod list_analyses;
mod request_analysis;

pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery};
pub use list_analyses::ListAnalysesHandler;
pub use request_analysis::{RequestAnalysisCommand, RequestAnalysisHandler};
