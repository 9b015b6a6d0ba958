mod analyse;
mod output;
mod run;
mod savings;

use clap::{Parser, Subcommand};

pub use self::{
    analyse::{AnalyseArgs, analyse},
    run::{RunArgs, run},
    savings::{SavingsArgs, savings},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the monthly time and cost savings.
    #[clap(name = "savings")]
    Savings(SavingsArgs),

    /// Main command: run the full analysis from the command-line parameters.
    #[clap(name = "analyse", alias = "analyze")]
    Analyse(Box<AnalyseArgs>),

    /// Run the full analysis from a TOML scenario file.
    #[clap(name = "run")]
    Run(RunArgs),
}
