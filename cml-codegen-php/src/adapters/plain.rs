//! Plain PHP adapter: framework-free classes.

use cmlgen_config::Framework;

use super::FrameworkAdapter;

/// Adapter for classes without any framework integration.
#[derive(Debug, Clone, Default)]
pub struct PlainAdapter;

impl PlainAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FrameworkAdapter for PlainAdapter {
    fn framework(&self) -> Framework {
        Framework::Plain
    }
}
