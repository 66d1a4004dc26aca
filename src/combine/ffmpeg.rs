//! ffmpeg invocation.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::CombineError;

/// Lines of ffmpeg's stderr kept in error messages.
const STDERR_TAIL_LINES: usize = 5;

/// Concatenate the files listed in `filelist` into `output` without re-encoding.
pub async fn run_concat(ffmpeg: &Path, filelist: &Path, output: &Path) -> Result<(), CombineError> {
    tracing::debug!(
        "Running {} concat on {}",
        ffmpeg.display(),
        filelist.display()
    );

    let result = Command::new(ffmpeg)
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(filelist)
        .args(["-c", "copy"])
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CombineError::BinaryNotFound(ffmpeg.to_path_buf())
            } else {
                CombineError::ProcessFailed(format!("Failed to run ffmpeg: {}", e))
            }
        })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let lines: Vec<&str> = stderr.lines().collect();
        let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");
        return Err(CombineError::ProcessFailed(format!(
            "ffmpeg exited with status {}: {}",
            result.status, tail
        )));
    }

    Ok(())
}
