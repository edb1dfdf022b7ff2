//! OSMOSE Documentation Configuration
//!
//! Resolves, checks, and emits the build configuration of the OSMOSE
//! documentation: project identity, the release version read from the Maven
//! build descriptor, and every value the documentation generator consumes.

pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod extensions;
pub mod outputs;
pub mod overrides;
pub mod project;
pub mod theme;

pub use config::{CheckFinding, DocConfig, SourceOptions};
pub use descriptor::BuildDescriptor;
pub use emit::{generator_values, to_json, to_yaml, GeneratorValues};
pub use error::ConfigError;
pub use extensions::{default_extensions, BibtexOptions, DiagramOptions, TodoOptions};
pub use outputs::{LatexDocument, LatexElements, ManPage, TexinfoDocument};
pub use overrides::{Overrides, ProjectOverrides, SourceOverrides};
pub use project::ProjectInfo;
pub use theme::{HtmlOptions, Stylesheet};
