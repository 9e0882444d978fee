//! This module assembles compiled transition fragments and machine
//! parameters into the final program body. The outer and fragment templates
//! are loaded once per run and owned by the [`CodeGenerator`] for the run's
//! lifetime.

use crate::compiler::compile_all;
use crate::template::Template;
use crate::types::{CompilerError, MachineDescription, MachineParams, DEFAULT_TAPE_PADDING};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Caller-supplied build options, fed into the outer template alongside the
/// machine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Number of empty cells padded onto each side of the initial tape.
    pub tape_padding: usize,
    /// Whether the generated machine prints a per-step trace.
    pub debug: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            tape_padding: DEFAULT_TAPE_PADDING,
            debug: false,
        }
    }
}

/// Generates the program body for a parsed machine description.
///
/// Holds the outer program template and the per-transition fragment
/// template, both immutable for the run.
pub struct CodeGenerator {
    program: Template,
    transition: Template,
}

impl CodeGenerator {
    /// Creates a generator from explicit templates.
    pub fn new(program: Template, transition: Template) -> Self {
        Self {
            program,
            transition,
        }
    }

    /// Creates a generator from the default templates compiled into the
    /// library.
    pub fn embedded() -> Self {
        Self::new(
            Template::new(include_str!("../templates/turing_machine.c")),
            Template::new(include_str!("../templates/transition.c")),
        )
    }

    /// Creates a generator from template files on disk.
    pub fn from_files(program: &Path, transition: &Path) -> Result<Self, CompilerError> {
        Ok(Self::new(
            Template::new(read_template(program)?),
            Template::new(read_template(transition)?),
        ))
    }

    /// Generates the program body for a machine description.
    ///
    /// The pipeline is strictly linear and single-pass: compile every
    /// transition in source order, merge the blob with the machine
    /// parameters and build options, substitute the outer template.
    /// Identical input yields byte-identical output.
    pub fn generate(
        &self,
        machine: &MachineDescription,
        options: &BuildOptions,
    ) -> Result<String, CompilerError> {
        let transitions = compile_all(&machine.transitions, &self.transition)?;
        let params = template_params(&machine.params, transitions, options);

        self.program.substitute(&params)
    }
}

/// Builds the final substitution set: machine parameters (defaults already
/// applied) plus the assembled transitions blob plus the build options.
pub fn template_params(
    params: &MachineParams,
    transitions: String,
    options: &BuildOptions,
) -> HashMap<String, String> {
    let mut values = params.values().clone();
    values.insert("transitions".to_string(), transitions);
    values.insert("tape_padding".to_string(), options.tape_padding.to_string());
    // `//` comments the trace line out of the generated program
    values.insert(
        "debug".to_string(),
        if options.debug { "" } else { "//" }.to_string(),
    );

    values
}

fn read_template(path: &Path) -> Result<String, CompilerError> {
    fs::read_to_string(path).map_err(|e| {
        CompilerError::FileError(format!("Failed to read template {}: {}", path.display(), e))
    })
}
