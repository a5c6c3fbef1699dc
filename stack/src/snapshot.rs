use std::path::Path;

use serde::Deserialize;

use util::HashMap;

use crate::{DataSource, Error, Resource, Stack};

#[derive(Deserialize)]
struct SnapshotFile {
    stacks: Vec<StackEntry>,
}

#[derive(Deserialize)]
struct StackEntry {
    #[serde(flatten)]
    stack: Stack,
    #[serde(default)]
    resources: Vec<Resource>,
}

/// In-memory copy of an orchestration service's stacks and resources.
///
/// Stacks are looked up by id only; nested stacks are found by matching
/// a resource's physical id against stack ids.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// stacks in the order they were added
    stacks: Vec<Stack>,
    /// stack id -> index into `stacks`
    index: HashMap<String, usize>,
    /// stack id -> resources of that stack
    resources: HashMap<String, Vec<Resource>>,
}

impl Snapshot {
    /// Load a snapshot from a json file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a snapshot from json text.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let file: SnapshotFile = serde_json::from_str(text)?;
        let mut snapshot = Self::default();
        for entry in file.stacks {
            snapshot.add_stack(entry.stack, entry.resources)?;
        }
        log::debug!("loaded snapshot with {} stacks", snapshot.stacks.len());
        Ok(snapshot)
    }

    /// Add a stack and its resources. Stack ids must be unique.
    pub fn add_stack(&mut self, stack: Stack, resources: Vec<Resource>) -> Result<(), Error> {
        if self.index.contains_key(&stack.id) {
            return Err(Error::DuplicateStack(stack.id));
        }
        self.index.insert(stack.id.clone(), self.stacks.len());
        self.resources.insert(stack.id.clone(), resources);
        self.stacks.push(stack);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    fn stack_by_id(&self, what: &'static str, id: &str) -> Result<Stack, Error> {
        self.index
            .get(id)
            .map(|&i| self.stacks[i].clone())
            .ok_or_else(|| Error::NotFound(what, id.to_owned()))
    }
}

impl DataSource for Snapshot {
    fn get_stack(&self, ident: &str) -> Result<Stack, Error> {
        self.stack_by_id("Stack", ident)
    }

    fn list_stacks(&self) -> Result<Vec<Stack>, Error> {
        Ok(self.stacks.clone())
    }

    fn list_resources(&self, stack_id: &str) -> Result<Vec<Resource>, Error> {
        self.resources
            .get(stack_id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Stack", stack_id.to_owned()))
    }

    fn get_nested_stack(&self, physical_id: &str) -> Result<Stack, Error> {
        self.stack_by_id("Nested stack", physical_id)
    }
}
