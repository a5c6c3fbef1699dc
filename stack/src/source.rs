use crate::{Error, Resource, Stack};

/// Read-only view of an orchestration service.
///
/// Lookups that can legitimately miss return [`Error::NotFound`];
/// any other error is a real failure.
pub trait DataSource {
    /// Fetch a stack by id.
    fn get_stack(&self, ident: &str) -> Result<Stack, Error>;
    /// List every stack visible to the caller.
    fn list_stacks(&self) -> Result<Vec<Stack>, Error>;
    /// List the resources of the stack with the given id.
    fn list_resources(&self, stack_id: &str) -> Result<Vec<Resource>, Error>;
    /// Fetch the stack backing a resource, by the resource's physical id.
    fn get_nested_stack(&self, physical_id: &str) -> Result<Stack, Error>;
}

/// Find a stack by id, falling back to a scan of all stacks by name.
pub fn find_stack<S: DataSource + ?Sized>(source: &S, ident: &str) -> Result<Stack, Error> {
    match source.get_stack(ident) {
        Ok(stack) => return Ok(stack),
        Err(e) if e.is_not_found() => {
            log::debug!("no stack with id '{ident}'; looking for a stack with that name");
        }
        Err(e) => return Err(e),
    }

    source
        .list_stacks()?
        .into_iter()
        .find(|stack| stack.name == ident)
        .ok_or_else(|| Error::NoSuchStack(ident.to_owned()))
}
