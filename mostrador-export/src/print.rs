use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{error, info};

use crate::{ExportError, ExportResult};

/// Hands a rendered PDF to the host spooler (`lp`, `lpr`, ...) on stdin.
#[derive(Debug, Clone)]
pub struct HostPrinter {
    command: String,
    args: Vec<String>,
}

impl HostPrinter {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// `None` when no spooler is configured
    pub fn from_config(command: Option<&str>, args: &[String]) -> Option<Self> {
        command
            .filter(|c| !c.trim().is_empty())
            .map(|c| Self::new(c, args.to_vec()))
    }

    pub async fn print(&self, document: &[u8]) -> ExportResult<()> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExportError::PrintFailed(format!("{}: {}", self.command, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(document)
                .await
                .map_err(|e| ExportError::PrintFailed(format!("{}: {}", self.command, e)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExportError::PrintFailed(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Print command {} exited with {}: {}", self.command, output.status, stderr.trim());
            return Err(ExportError::PrintFailed(format!(
                "{} exited with {}",
                self.command, output.status
            )));
        }

        info!("Sent {} bytes to {}", document.len(), self.command);
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_blank_command_disables_printing() {
        assert!(HostPrinter::from_config(None, &[]).is_none());
        assert!(HostPrinter::from_config(Some("  "), &[]).is_none());
        assert!(HostPrinter::from_config(Some("lp"), &[]).is_some());
    }

    #[tokio::test]
    async fn test_print_pipes_document() {
        let printer = HostPrinter::new("cat", vec![]);
        printer.print(b"%PDF-1.5 test").await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_command_is_reported() {
        let printer = HostPrinter::new("false", vec![]);
        let result = printer.print(b"%PDF").await;
        assert!(matches!(result, Err(ExportError::PrintFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_command_is_reported() {
        let printer = HostPrinter::new("mostrador-no-such-spooler", vec![]);
        assert!(printer.print(b"%PDF").await.is_err());
    }
}
