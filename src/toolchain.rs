//! This module invokes the external native toolchain. The assembled program
//! body is piped to the system C compiler over stdin as a single blocking
//! call; only success or failure is observed.

use crate::types::CompilerError;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// The system compiler the program body is handed to.
const DEFAULT_COMPILER: &str = "cc";

/// Compiles the assembled program body into a binary at `output`.
///
/// # Returns
///
/// * `Ok(())` if the toolchain exits successfully.
/// * `Err(CompilerError::Toolchain)` if the compiler cannot be spawned,
///   the body cannot be handed over, or the compiler exits with an error.
pub fn compile_to_binary(source: &str, output: &Path) -> Result<(), CompilerError> {
    invoke(DEFAULT_COMPILER, source, output)
}

fn invoke(compiler: &str, source: &str, output: &Path) -> Result<(), CompilerError> {
    let mut child = Command::new(compiler)
        .args(["-x", "c", "-O2", "-o"])
        .arg(output)
        .arg("-")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CompilerError::Toolchain(format!("Failed to spawn {compiler}: {e}")))?;

    child
        .stdin
        .take()
        .ok_or_else(|| CompilerError::Toolchain(format!("Failed to open {compiler} stdin")))?
        .write_all(source.as_bytes())
        .map_err(|e| CompilerError::Toolchain(format!("Failed to hand body to {compiler}: {e}")))?;

    let status = child
        .wait()
        .map_err(|e| CompilerError::Toolchain(format!("Failed to wait on {compiler}: {e}")))?;

    if !status.success() {
        return Err(CompilerError::Toolchain(format!(
            "{compiler} exited with {status}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_unknown_compiler() {
        let result = invoke(
            "definitely-not-a-compiler",
            "int main() { return 0; }",
            Path::new("/tmp/unused"),
        );

        assert!(matches!(result, Err(CompilerError::Toolchain(_))));
    }
}
