use clap::Args;
use eyre::Result;

use super::ConfigArgs;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = self.config.open();
        let generators = self.config.generators(&file);
        let groups = self.config.load_groups(&file);
        let options = ops::generator_options(&file, &generators)?;

        let report = ops::check(file.path(), groups, file.config().packages(), options);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
