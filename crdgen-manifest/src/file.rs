use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Default config file name.
pub const CONFIG_FILE: &str = "crdgen.toml";

/// A crdgen.toml file with both raw content and parsed config.
///
/// Relative paths in the config are resolved against the directory the
/// file lives in.
#[derive(Debug, Clone)]
pub struct CrdgenToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl CrdgenToml {
    /// Open and parse a crdgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self { path, content, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Directory containing the config file.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    pub fn crd_paths(&self) -> Vec<PathBuf> {
        self.config.input.crds.iter().map(|p| self.resolve(p)).collect()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.generator.output)
    }

    pub fn header_file(&self) -> Option<PathBuf> {
        self.config.generator.header_file.as_deref().map(|p| self.resolve(p))
    }
}
