use std::process::Stdio;

use tokio::process::Command;

use super::{CaptureCallback, CaptureEvent, CaptureSession, SpeechRecognizer};
use crate::error::{Error, Result};

const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Runs an external speech-to-text program for each capture session.
///
/// The program gets the locale tag either in place of a `{locale}` argument
/// or as its last argument, and its first non-empty stdout line is taken as
/// the final transcript. Exiting non-zero reports an error.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| Error::Config("voice command is empty".to_string()))?;

        if program.trim().is_empty() {
            return Err(Error::Config("voice command has no program".to_string()));
        }

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args_for(&self, locale: &str) -> Vec<String> {
        if self.args.iter().any(|arg| arg.contains(LOCALE_PLACEHOLDER)) {
            self.args
                .iter()
                .map(|arg| arg.replace(LOCALE_PLACEHOLDER, locale))
                .collect()
        } else {
            let mut args = self.args.clone();
            args.push(locale.to_string());
            args
        }
    }
}

/// First non-empty line of recognizer output.
fn first_transcript(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

impl SpeechRecognizer for CommandRecognizer {
    fn name(&self) -> &str {
        "command"
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn start(&self, locale: &str, on_event: CaptureCallback) -> Result<CaptureSession> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::Capture(format!("no async runtime: {}", e)))?;

        let mut command = Command::new(&self.program);
        command
            .args(self.args_for(locale))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let program = self.program.clone();
        let task = runtime.spawn(async move {
            let child = match command.spawn() {
                Ok(child) => child,
                Err(e) => {
                    on_event(CaptureEvent::Error(format!("failed to run {}: {}", program, e)));
                    on_event(CaptureEvent::Ended);
                    return;
                }
            };

            on_event(CaptureEvent::Started);

            match child.wait_with_output().await {
                Ok(output) if output.status.success() => {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    match first_transcript(&stdout) {
                        Some(transcript) => on_event(CaptureEvent::Result {
                            transcript,
                            is_final: true,
                        }),
                        None => tracing::debug!(program = %program, "recognizer heard nothing"),
                    }
                }
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    on_event(CaptureEvent::Error(format!(
                        "{} exited with {}: {}",
                        program,
                        output.status,
                        stderr.trim()
                    )));
                }
                Err(e) => on_event(CaptureEvent::Error(format!("{} failed: {}", program, e))),
            }

            on_event(CaptureEvent::Ended);
        });

        Ok(CaptureSession::from_task(task))
    }
}
