mod lexicon;
mod records;
mod regions;
mod results;

pub use lexicon::{parse_lexicon, read_lexicon};
pub use records::read_records;
pub use regions::{parse_regions, read_regions};
pub use results::write_results;
