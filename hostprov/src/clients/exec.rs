use std::process::Command;

use crate::backend::BackendError;

/// Run a tool and return its stdout, mapping spawn failures and non-zero
/// exits into [`BackendError`].
pub(super) fn run(tool: &str, args: &[&str]) -> Result<String, BackendError> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| BackendError::Spawn {
            tool: tool.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        return Err(BackendError::Tool {
            tool: tool.to_string(),
            status: output.status.code().unwrap_or(-1),
            stderr: if stderr.is_empty() { stdout } else { stderr },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a deletion-style command where "the record is already gone" is an
/// acceptable answer. Returns `Ok(false)` when the tool's failure output
/// matches one of `missing_markers`, `Ok(true)` on success.
pub(super) fn run_allow_missing(
    tool: &str,
    args: &[&str],
    missing_markers: &[&str],
) -> Result<bool, BackendError> {
    match run(tool, args) {
        Ok(_) => Ok(true),
        Err(BackendError::Tool { stderr, .. })
            if marker_matches(&stderr, missing_markers) =>
        {
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

fn marker_matches(text: &str, markers: &[&str]) -> bool {
    let lowered = text.to_ascii_lowercase();
    markers.iter().any(|m| lowered.contains(m))
}
