//! Command handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
