use std::process::Command;

use crate::error::{DoctorError, DoctorResult};

/// Run an external command and require a successful exit.
///
/// The command is spawned with an explicit argument list, never through a
/// shell. Standard output and error are captured together and trimmed.
pub fn run_checked(program: &str, args: &[String]) -> DoctorResult<String> {
    let captured = capture(program, args)?;
    if !captured.success {
        return Err(DoctorError::command_failed(
            program,
            if captured.text.is_empty() {
                "exited with an error".to_string()
            } else {
                captured.text
            },
        ));
    }
    Ok(captured.text)
}

/// Run an external command, tolerating a non-zero exit.
///
/// A failing exit status still yields whatever the command printed; only a
/// spawn failure (executable missing, not runnable) is an error.
pub fn run_lenient(program: &str, args: &[String]) -> DoctorResult<String> {
    Ok(capture(program, args)?.text)
}

struct Captured {
    success: bool,
    text: String,
}

fn capture(program: &str, args: &[String]) -> DoctorResult<Captured> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| DoctorError::command_failed(program, e.to_string()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut text = String::from(stdout.trim());
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(stderr);
    }

    Ok(Captured {
        success: output.status.success(),
        text,
    })
}
