mod score;
mod tokenize;

pub use score::{score, score_records};
pub use tokenize::tokenize;
