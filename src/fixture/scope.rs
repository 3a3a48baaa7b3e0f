/// Explicit teardown stack for composite fixture acquisitions.
///
/// Release closures registered with `defer` run in reverse registration
/// order when the scope drops, so a value acquired on top of another is
/// always released before its dependency (last-acquired-first-released).
/// Dropping on panic unwinds runs the same closures.
pub struct FixtureScope {
    teardowns: Vec<Box<dyn FnOnce()>>,
}

impl FixtureScope {
    pub fn new() -> Self {
        FixtureScope {
            teardowns: Vec::new(),
        }
    }

    /// Register a release action for the most recently acquired value.
    pub fn defer(&mut self, teardown: impl FnOnce() + 'static) {
        self.teardowns.push(Box::new(teardown));
    }

    pub fn len(&self) -> usize {
        self.teardowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teardowns.is_empty()
    }
}

impl Default for FixtureScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FixtureScope {
    fn drop(&mut self) {
        while let Some(teardown) = self.teardowns.pop() {
            teardown();
        }
    }
}
