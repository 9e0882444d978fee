//! This crate provides the core logic for a Turing Machine compiler.
//! It includes modules for parsing machine descriptions, compiling
//! transition rules into code fragments, assembling the final program body,
//! and handing it to the native toolchain.

pub mod codegen;
pub mod compiler;
pub mod loader;
pub mod parser;
pub mod template;
pub mod toolchain;
pub mod types;

/// Re-exports the code generation types from the codegen module.
pub use codegen::{BuildOptions, CodeGenerator};
/// Re-exports the transition compilation functions from the compiler module.
pub use compiler::{compile_all, normalize, NormalizedTransition};
/// Re-exports the `SourceLoader` struct from the loader module.
pub use loader::SourceLoader;
/// Re-exports the `parse` function and `LineKind` classifier from the parser module.
pub use parser::{classify, parse, LineKind};
/// Re-exports the `Template` struct from the template module.
pub use template::Template;
/// Re-exports the toolchain invocation from the toolchain module.
pub use toolchain::compile_to_binary;
/// Re-exports the core data types from the types module.
pub use types::{
    CompilerError, MachineDescription, MachineParams, Move, TransitionRecord,
    DEFAULT_EMPTY_SYMBOL, DEFAULT_START_STATE, DEFAULT_TAPE_PADDING,
};
