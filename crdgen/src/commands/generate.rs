use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tracing::info;

use super::{ConfigArgs, absolute};
use crate::ops::{self, generate::GenerateOptions};
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (overrides crdgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = self.config.open();
        let generators = self.config.generators(&file);
        let groups = self.config.load_groups(&file);
        info!(groups = groups.len(), "loaded manifests");

        let output_dir = match &self.output {
            Some(output) => absolute(output),
            None => file.output_dir(),
        };
        let emitter = ops::generator_options(&file, &generators)?;
        let report = ops::generate(
            groups,
            file.config().packages(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                generators,
                emitter,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
