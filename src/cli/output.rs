use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::analysis::AnalysisReport,
    prelude::*,
    report::{to_json, write_letter},
    scenario::Service,
    tables::{build_cash_flow_table, build_summary_table},
};

#[derive(Parser)]
pub struct OutputArgs {
    /// Also write a plain-text report letter to this file.
    #[clap(long = "report", env = "REPORT_PATH")]
    pub report_path: Option<PathBuf>,

    /// Print the results as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn emit(&self, service: Service, report: &AnalysisReport) -> Result {
        if self.json {
            println!("{}", to_json(service, report)?);
        } else {
            println!("{}", build_summary_table(service, report));
            println!("{}", build_cash_flow_table(report));
            println!("{}", report.sensitivity);
        }
        if let Some(path) = &self.report_path {
            write_letter(path, service, report)?;
            info!(path = %path.display(), "written the report");
        }
        Ok(())
    }
}
