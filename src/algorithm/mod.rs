/// Composite cost model and its individual terms
pub mod cost;
/// Parallel best-candidate search with deterministic tie-breaking
pub mod evaluator;
/// Frontier-growth placement engine
pub mod executor;
/// Bounded history of recent placements
pub mod history;
/// Single-writer placement loop for concurrent callers
pub mod service;
