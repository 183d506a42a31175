use anyhow::{Context, Result};

use crate::aggregate::{group_by_region, mean_sentiment};
use crate::analyze::score_records;
use crate::cli::AnalyzeArgs;
use crate::io::{read_lexicon, read_records, read_regions, write_results};

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker pool")?;
    }

    let mut records = read_records(&args.records)?;
    let lexicon = read_lexicon(&args.lexicon)?;
    let regions = read_regions(&args.regions)?;

    score_records(&mut records, &lexicon);
    let grouped = group_by_region(&records, &regions);
    let results = mean_sentiment(&grouped);

    let located: usize = grouped.values().map(Vec::len).sum();
    log::info!("{located} of {} records fell inside a region", records.len());

    write_results(&args.output, &results)?;
    log::info!("wrote {} region means to {}", results.len(), args.output.display());
    Ok(())
}
