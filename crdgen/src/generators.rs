//! Selecting which generators run.
//!
//! `--generators` takes a comma separated list of toggles:
//!
//! - `name` selects a generator explicitly. When any bare name is given,
//!   the bare names are the whole set and the other toggles are ignored.
//! - `+name` enables a generator in addition to the defaults.
//! - `-name` disables a generator. `+name` wins over `-name`.
//!
//! Unknown names are ignored with a warning.

use std::collections::BTreeSet;
use std::fmt;

use tracing::warn;

/// A generator, ordered the way generators run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneratorKind {
    /// Per-group install files and the global scheme file.
    Install,
    /// Per-group CRD constructor files.
    Crd,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::Install, GeneratorKind::Crd];

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Install => "install",
            GeneratorKind::Crd => "crd",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the enabled generators from the configured defaults and the
/// toggles given on the command line.
pub fn resolve_generators<S: AsRef<str>>(defaults: &[GeneratorKind], toggles: &[S]) -> Vec<GeneratorKind> {
    let mut plus = BTreeSet::new();
    let mut minus = BTreeSet::new();
    let mut bare = BTreeSet::new();

    for toggle in toggles {
        let toggle = toggle.as_ref().trim();
        if toggle.is_empty() {
            continue;
        }
        let (set, name) = match (toggle.strip_prefix('+'), toggle.strip_prefix('-')) {
            (Some(name), _) => (&mut plus, name),
            (_, Some(name)) => (&mut minus, name),
            _ => (&mut bare, toggle),
        };
        match GeneratorKind::from_name(name) {
            Some(kind) => {
                set.insert(kind);
            }
            None => warn!(generator = name, "ignoring unknown generator"),
        }
    }

    let enabled: BTreeSet<GeneratorKind> = if bare.is_empty() {
        let defaults: BTreeSet<GeneratorKind> = defaults.iter().copied().collect();
        defaults.difference(&minus).copied().chain(plus).collect()
    } else {
        bare
    };
    enabled.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use GeneratorKind::{Crd, Install};

    #[test]
    fn test_defaults_without_toggles() {
        let none: [&str; 0] = [];
        assert_eq!(resolve_generators(&[Crd, Install], &none), [Install, Crd]);
        assert_eq!(resolve_generators(&[Crd], &none), [Crd]);
    }

    #[test]
    fn test_minus_and_plus() {
        assert_eq!(resolve_generators(&[Install, Crd], &["-install"]), [Crd]);
        assert_eq!(resolve_generators(&[Crd], &["+install"]), [Install, Crd]);
        assert!(resolve_generators(&[Install, Crd], &["-crd", "-install"]).is_empty());
        assert_eq!(resolve_generators(&[Install], &["-crd", "+crd"]), [Install, Crd]);
    }

    #[test]
    fn test_bare_names_replace_defaults() {
        assert_eq!(resolve_generators(&[Install], &["crd"]), [Crd]);
        assert_eq!(resolve_generators(&[], &["crd", "install"]), [Install, Crd]);
        assert_eq!(resolve_generators(&[Install, Crd], &["crd", "-crd", "+install"]), [Crd]);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        assert_eq!(resolve_generators(&[Install], &["deepcopy", "+client", " "]), [Install]);
    }
}
