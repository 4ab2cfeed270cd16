//! Vector indexing: exhaustive nearest-neighbor search plus the
//! paired provenance sequence.
//!
//! - [`FlatIndex`]: raw squared-L2 k-NN over row-major storage
//! - [`CorpusIndex`]: the flat index and its chunk records owned
//!   together, so their lengths can never drift apart

mod corpus;
mod flat;

pub use corpus::CorpusIndex;
pub use flat::FlatIndex;
