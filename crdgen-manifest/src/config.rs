//! `crdgen.toml` schema and parsing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crdgen_ir::Package;
use serde::Deserialize;

use crate::error::SourceContext;
use crate::{Error, Result};

/// Root of `crdgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub input: InputConfig,

    /// Go packages holding the API types, one per group version.
    #[serde(default)]
    pub packages: Vec<PackageConfig>,
}

/// `[generator]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Boilerplate placed at the top of every generated file.
    pub header_file: Option<PathBuf>,

    /// Replaces `YEAR` in the header. Defaults to the current year.
    pub year: Option<String>,

    #[serde(default)]
    pub allow_dangerous_types: bool,

    /// Maximum description length in bytes; `0` strips descriptions.
    pub max_desc_len: Option<usize>,

    #[serde(default = "default_true")]
    pub gen_crd: bool,

    #[serde(default = "default_true")]
    pub gen_install: bool,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header_file: None,
            year: None,
            allow_dangerous_types: false,
            max_desc_len: None,
            gen_crd: true,
            gen_install: true,
            output: default_output(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

/// `[input]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// CRD manifest files, or directories searched for `*.json`.
    #[serde(default)]
    pub crds: Vec<PathBuf>,
}

/// `[[packages]]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    pub path: String,
    pub group: String,
    pub version: String,
}

impl From<&PackageConfig> for Package {
    fn from(config: &PackageConfig) -> Self {
        Package::new(&config.path, &config.group, &config.version)
    }
}

impl Config {
    pub fn packages(&self) -> Vec<Package> {
        self.packages.iter().map(Package::from).collect()
    }

    /// Parse a crdgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a crdgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "crdgen.toml")
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if let Some(year) = &config.generator.year
        && (year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(ctx.validation_error(format!("year '{year}' is not a number"), Some(year)));
    }

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for package in &config.packages {
        for (field, value) in [
            ("path", &package.path),
            ("group", &package.group),
            ("version", &package.version),
        ] {
            if value.trim().is_empty() {
                let anchor = [&package.path, &package.group, &package.version]
                    .into_iter()
                    .find(|v| !v.is_empty())
                    .map(String::as_str);
                return Err(ctx.validation_error(format!("package {field} must not be empty"), anchor));
            }
        }
        if let Some(group) = seen.insert(&package.path, &package.group) {
            return Err(ctx.validation_error(
                format!(
                    "package '{}' is listed twice (groups '{group}' and '{}')",
                    package.path, package.group
                ),
                Some(&package.path),
            ));
        }
    }
    Ok(())
}
