use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DescriptorProblem, WorkspaceError};

pub const DESCRIPTOR_FILE: &str = "package.json";

/// The parts of a `package.json` bumpbot cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// Workspace glob patterns; `None` unless `workspaces` is an array.
    pub workspaces: Option<Vec<String>>,
    pub meta: DescriptorMeta,
}

/// Repository-specific settings under the `meta` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorMeta {
    #[serde(default)]
    pub publish_target: Option<String>,
}

/// # Errors
///
/// Returns [`WorkspaceError::DescriptorNotFound`] if the file is absent, and a
/// read, parse or validation error otherwise.
pub fn read_descriptor(path: &Path) -> Result<Descriptor, WorkspaceError> {
    if !path.exists() {
        return Err(WorkspaceError::DescriptorNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| WorkspaceError::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_descriptor(path, &content)
}

/// Parses and validates descriptor text. `path` is only used in errors.
///
/// # Errors
///
/// Returns [`WorkspaceError::DescriptorParse`] for malformed JSON and
/// [`WorkspaceError::InvalidDescriptor`] when `name` or `version` is missing
/// or not a string.
pub fn parse_descriptor(path: &Path, content: &str) -> Result<Descriptor, WorkspaceError> {
    let value: Value =
        serde_json::from_str(content).map_err(|source| WorkspaceError::DescriptorParse {
            path: path.to_path_buf(),
            source,
        })?;

    let invalid = |problem| WorkspaceError::InvalidDescriptor {
        path: path.to_path_buf(),
        problem,
    };

    let Value::Object(fields) = value else {
        return Err(invalid(DescriptorProblem::NotAnObject));
    };

    let version = required_string(
        &fields,
        "version",
        DescriptorProblem::MissingVersion,
        DescriptorProblem::VersionNotString,
    )
    .map_err(invalid)?;
    let name = required_string(
        &fields,
        "name",
        DescriptorProblem::MissingName,
        DescriptorProblem::NameNotString,
    )
    .map_err(invalid)?;

    let description = fields
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let workspaces = fields.get("workspaces").and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(|item| {
                let pattern = item.as_str();
                if pattern.is_none() {
                    debug!(path = %path.display(), entry = %item, "ignoring non-string workspace entry");
                }
                pattern.map(str::to_owned)
            })
            .collect()
    });

    let meta = match fields.get("meta") {
        Some(meta) => DescriptorMeta::deserialize(meta).unwrap_or_else(|e| {
            debug!(path = %path.display(), error = %e, "ignoring malformed meta section");
            DescriptorMeta::default()
        }),
        None => DescriptorMeta::default(),
    };

    Ok(Descriptor {
        name,
        version,
        description,
        workspaces,
        meta,
    })
}

fn required_string(
    fields: &Map<String, Value>,
    key: &str,
    missing: DescriptorProblem,
    not_string: DescriptorProblem,
) -> Result<String, DescriptorProblem> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(missing),
        Some(Value::String(s)) if s.is_empty() => Err(missing),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(not_string),
    }
}
