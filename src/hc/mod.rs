//! Sliding window, hash-chain index, and match finder.

pub mod chain;
pub mod search;
pub mod types;
pub mod window;

pub use chain::{Candidates, HashChain};
pub use search::longest_match;
pub use types::{Match, MAX_DISTANCE, MINMATCH, WINDOW_SIZE};
pub use window::Window;
