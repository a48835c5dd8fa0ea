mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use crdgen_apis::CustomResourceDefinition;
use crdgen_ir::Group;
use crdgen_manifest::{CONFIG_FILE, CrdgenToml, LoadOptions, load_groups};
use eyre::Result;
use generate::GenerateCommand;

use crate::generators::{GeneratorKind, resolve_generators};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crdgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crdgen")]
#[command(version)]
#[command(about = "Generate Go constructors for Kubernetes CustomResourceDefinitions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go files from the CRD manifests
    Generate(GenerateCommand),

    /// Validate crdgen.toml and the manifests without writing files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Config file location and the settings that override it.
#[derive(Args)]
pub struct ConfigArgs {
    /// Path to crdgen.toml (defaults to ./crdgen.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Boilerplate file placed at the top of every generated file
    #[arg(long)]
    pub header_file: Option<PathBuf>,

    /// Year substituted into the header (defaults to the current year)
    #[arg(long)]
    pub year: Option<String>,

    /// Allow floating point schemas
    #[arg(long)]
    pub allow_dangerous_types: bool,

    /// Maximum description length; 0 strips descriptions
    #[arg(long)]
    pub max_desc_len: Option<usize>,

    /// Generator toggles: `name`, `+name` or `-name` (install, crd)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub generators: Vec<String>,
}

impl ConfigArgs {
    /// Open crdgen.toml and apply the command line overrides.
    pub fn open(&self) -> CrdgenToml {
        let mut file = CrdgenToml::open(&self.config).unwrap_or_exit();
        let generator = &mut file.config_mut().generator;
        if let Some(header_file) = &self.header_file {
            generator.header_file = Some(absolute(header_file));
        }
        if let Some(year) = &self.year {
            generator.year = Some(year.clone());
        }
        if self.allow_dangerous_types {
            generator.allow_dangerous_types = true;
        }
        if let Some(max_desc_len) = self.max_desc_len {
            generator.max_desc_len = Some(max_desc_len);
        }
        file
    }

    pub fn generators(&self, file: &CrdgenToml) -> Vec<GeneratorKind> {
        let generator = &file.config().generator;
        let defaults: Vec<GeneratorKind> = GeneratorKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                GeneratorKind::Install => generator.gen_install,
                GeneratorKind::Crd => generator.gen_crd,
            })
            .collect();
        resolve_generators(&defaults, &self.generators)
    }

    pub fn load_groups(&self, file: &CrdgenToml) -> Vec<Group<CustomResourceDefinition>> {
        let generator = &file.config().generator;
        let options = LoadOptions {
            allow_dangerous_types: generator.allow_dangerous_types,
            max_desc_len: generator.max_desc_len,
        };
        load_groups(&file.crd_paths(), options).unwrap_or_exit()
    }
}

/// Command line paths are relative to the working directory, not to the
/// config file.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
