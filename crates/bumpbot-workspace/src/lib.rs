mod descriptor;
mod error;
mod workspace;

pub use descriptor::{DESCRIPTOR_FILE, Descriptor, DescriptorMeta, parse_descriptor, read_descriptor};
pub use error::{DescriptorProblem, WorkspaceError};
pub use workspace::discover_packages;

pub type Result<T> = std::result::Result<T, WorkspaceError>;
