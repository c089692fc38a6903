use crate::shared::error::CycleCheckError;
use crate::shared::Result;

/// NewType wrapper for a module/package identifier
///
/// Any non-empty string is accepted; providers other than `go list` may use
/// ids with spaces or of arbitrary length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            return Err(CycleCheckError::Validation {
                message: "Module id cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One compilation unit and its direct dependencies, as emitted by the
/// metadata provider. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    id: ModuleId,
    imports: Vec<String>,
}

impl DependencyRecord {
    pub fn new(id: String, imports: Vec<String>) -> Result<Self> {
        Ok(Self {
            id: ModuleId::new(id)?,
            imports,
        })
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    /// Direct dependencies in the order the provider listed them
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn into_parts(self) -> (ModuleId, Vec<String>) {
        (self.id, self.imports)
    }
}
