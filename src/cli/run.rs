use std::path::PathBuf;

use clap::Parser;

use crate::{cli::output::OutputArgs, prelude::*, scenario::Scenario};

#[derive(Parser)]
pub struct RunArgs {
    /// TOML scenario file.
    pub path: PathBuf,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn run(args: &RunArgs) -> Result {
    let scenario = Scenario::load(&args.path)?;
    let report = scenario.analyse()?;
    args.output.emit(scenario.service, &report)
}
