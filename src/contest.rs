use anyhow::Error;
use itertools::Itertools;

use boca_maker_format::{build_contest, select_random_problems, BocaConfig};

use crate::opt::Opt;

/// The names of the problems of the contest: drawn at random from the directories in `opt.ids`,
/// or the ids themselves without repetitions.
pub fn contest_problems(opt: &Opt, config: &BocaConfig) -> Result<Vec<String>, Error> {
    if !opt.random {
        return Ok(opt.ids.iter().unique().cloned().collect());
    }
    let seed = opt.seed.unwrap_or_else(|| fastrand::u64(..));
    debug!("Random contest with seed {}", seed);
    let mut rng = fastrand::Rng::with_seed(seed);
    select_random_problems(&opt.ids, &config.problems_dir, &mut rng)
}

/// Entry point of `boca-maker`.
pub fn main_contest(opt: Opt) -> Result<(), Error> {
    let config = opt.config.to_config()?;
    debug!("Configuration: {:?}", config);

    let problems = contest_problems(&opt, &config)?;
    info!("Problems: {}", problems.join(", "));

    let output = build_contest(
        &problems,
        &opt.document,
        &opt.base_dir,
        opt.date.clone(),
        &config,
    )?;
    info!(
        "Contest ready in {}: {}",
        output.dir.display(),
        output
            .archives
            .iter()
            .map(|(label, _)| format!("{}.zip", label))
            .join(" ")
    );
    Ok(())
}
