//! Company analysis provider adapters.
//!
//! Only the mock ships with the core; a production LLM-backed provider is
//! wired at the composition root.

mod mock_provider;

pub use mock_provider::MockAnalysisProvider;
