//! Unit emission: one PHP source file per enumeration, value object or entity.

mod class;
pub mod constructor;
mod context;
mod entity;
mod enumeration;
mod value_object;

use cmlgen_codegen::generation::TypeRegistry;
use cmlgen_config::GeneratorConfig;

pub use self::{
    constructor::Member,
    context::{ReadonlyMode, References, ResolvedProperty, UnitContext},
};
use crate::adapters::FrameworkAdapter;

/// Emits the source of single units.
///
/// Holds everything shared by the units of one generation run; each
/// `emit_*` call is independent of the others.
pub struct Emitter<'a> {
    config: &'a GeneratorConfig,
    registry: &'a TypeRegistry,
    adapter: &'a dyn FrameworkAdapter,
}

impl<'a> Emitter<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        registry: &'a TypeRegistry,
        adapter: &'a dyn FrameworkAdapter,
    ) -> Self {
        Self {
            config,
            registry,
            adapter,
        }
    }
}
