use std::fmt;
use std::path::PathBuf;

use semver::Version;

/// Which version component a bump increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseType {
    Patch,
    Minor,
    Major,
}

impl ReleaseType {
    pub const ALL: [Self; 3] = [Self::Patch, Self::Minor, Self::Major];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Patch => "Backwards compatible bug fixes",
            Self::Minor => "Backwards compatible features",
            Self::Major => "Contains breaking changes",
        }
    }

    /// The version `npm version <type>` produces from `current`. A pre-release
    /// of the target version graduates instead of incrementing. `None` when the
    /// incremented component would overflow.
    #[must_use]
    pub fn next_version(self, current: &Version) -> Option<Version> {
        let pre = !current.pre.is_empty();
        let next = match self {
            Self::Major if pre && current.minor == 0 && current.patch == 0 => {
                Version::new(current.major, 0, 0)
            }
            Self::Major => Version::new(current.major.checked_add(1)?, 0, 0),
            Self::Minor if pre && current.patch == 0 => {
                Version::new(current.major, current.minor, 0)
            }
            Self::Minor => Version::new(current.major, current.minor.checked_add(1)?, 0),
            Self::Patch if pre => Version::new(current.major, current.minor, current.patch),
            Self::Patch => {
                Version::new(current.major, current.minor, current.patch.checked_add(1)?)
            }
        };
        Some(next)
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips a leading `scope/` segment: `@acme/widget` becomes `widget`.
#[must_use]
pub fn name_no_scope(name: &str) -> &str {
    name.split_once('/').map_or(name, |(_, rest)| rest)
}

/// A package discovered in the workspace, read once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub name_no_scope: String,
    /// Directory containing the descriptor.
    pub directory: PathBuf,
    /// Path of the descriptor file itself.
    pub file: PathBuf,
    pub root: bool,
}

impl PackageEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        let name = name.into();
        let file = file.into();
        let directory = file
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default();
        Self {
            name_no_scope: name_no_scope(&name).to_string(),
            name,
            version: version.into(),
            description: None,
            directory,
            file,
            root: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn as_root(mut self) -> Self {
        self.root = true;
        self
    }

    /// Hint shown next to the package in selection prompts.
    #[must_use]
    pub fn hint(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Selections made in one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpResponse {
    pub base: String,
    pub remote: String,
    pub package_name: String,
    pub release_type: ReleaseType,
}
