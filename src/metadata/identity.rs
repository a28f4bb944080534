//! Assembly references handed along with source generation requests.

use std::fmt;

/// Name and version of an assembly a generated source file would have to reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReference {
    /// Simple assembly name (`mscorlib`, `System.Core`)
    pub name: String,
    /// Major version number
    pub major_version: u16,
    /// Minor version number
    pub minor_version: u16,
    /// Build number
    pub build_number: u16,
    /// Revision number
    pub revision_number: u16,
}

impl AssemblyReference {
    /// Create a new reference to `name` with version `major.minor.build.revision`
    pub fn new(name: impl Into<String>, version: (u16, u16, u16, u16)) -> Self {
        AssemblyReference {
            name: name.into(),
            major_version: version.0,
            minor_version: version.1,
            build_number: version.2,
            revision_number: version.3,
        }
    }
}

impl fmt::Display for AssemblyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Version={}.{}.{}.{}",
            self.name,
            self.major_version,
            self.minor_version,
            self.build_number,
            self.revision_number
        )
    }
}
