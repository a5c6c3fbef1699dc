use serde::Deserialize;

/// A named collection of provisioned resources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stack {
    /// Unique id assigned by the orchestration service.
    pub id: String,
    /// Display name; not guaranteed unique.
    pub name: String,
}

impl Stack {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One provisioned object within a stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    /// Local name, unique only within the owning stack.
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Id of the underlying object. For nested stack resources,
    /// this is the id of the nested stack.
    #[serde(default)]
    pub physical_id: Option<String>,
    /// Local names of resources in the same stack that require this one.
    #[serde(default)]
    pub required_by: Vec<String>,
}

impl Resource {
    pub fn new(name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            physical_id: None,
            required_by: Vec::with_capacity(0),
        }
    }

    pub fn with_physical_id(mut self, physical_id: impl Into<String>) -> Self {
        self.physical_id = Some(physical_id.into());
        self
    }

    pub fn with_required_by(mut self, name: impl Into<String>) -> Self {
        self.required_by.push(name.into());
        self
    }
}
