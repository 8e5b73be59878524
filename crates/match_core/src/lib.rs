//! Core logic for head-to-head match analysis.
//!
//! A batch of match results becomes a directed "defeat graph" (winner ->
//! loser). Two teams are then compared by breadth-first reachability:
//! did one beat the other directly, through a chain of wins, both ways,
//! or not at all.
//!
//! ```
//! use match_core::{classify, parse_matches, ParseOptions, SAMPLE_MATCHES};
//!
//! let parsed = parse_matches(SAMPLE_MATCHES, &ParseOptions::default()).unwrap();
//! let verdict = classify(&parsed.graph, "MI", "CSK").unwrap();
//! assert_eq!(verdict.to_string(), "MI DEFEATED CSK (Direct)");
//! ```

pub mod classify;
pub mod error;
pub mod export;
pub mod graph;
pub mod parser;
pub mod reach;
pub mod session;
pub mod types;

pub use classify::*;
pub use error::*;
pub use export::*;
pub use graph::*;
pub use parser::*;
pub use reach::*;
pub use session::*;
pub use types::*;
