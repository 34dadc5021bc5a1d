//! Language-neutral building blocks for emitted source.
//!
//! [`ClassSpec`] and [`EnumSpec`] describe declarations; a language renderer
//! turns them into [`CodeFragment`]s, which [`CodeBuilder`] writes out with
//! the configured [`Indent`].

mod code_builder;
mod indent;
mod renderable;
mod structure;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use structure::{
    CaseSpec, ClassSpec, ConstructorParam, ConstructorSpec, EnumSpec, MethodSpec, ParamSpec,
    PropertySpec, Visibility,
};
