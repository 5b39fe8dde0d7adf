//! Destination folder prompts

use crate::adapters::host::FolderPrompt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A folder chosen up front (`--output` or `export.output_dir`)
#[derive(Debug, Clone)]
pub struct FixedFolder {
    folder: PathBuf,
}

impl FixedFolder {
    /// Always answer with `folder`
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl FolderPrompt for FixedFolder {
    fn choose_folder(&mut self) -> Option<PathBuf> {
        Some(self.folder.clone())
    }
}

/// Asks for the folder on a line-oriented terminal
///
/// An empty answer (or end of input) cancels.
pub struct StdinFolderPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinFolderPrompt<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn new() -> Self {
        Self::with_io(std::io::stdin().lock(), std::io::stderr())
    }
}

impl Default for StdinFolderPrompt<std::io::StdinLock<'static>, std::io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinFolderPrompt<R, W> {
    /// Prompt on `output`, read the answer from `input`
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FolderPrompt for StdinFolderPrompt<R, W> {
    fn choose_folder(&mut self) -> Option<PathBuf> {
        if write!(self.output, "Export folder: ").and_then(|_| self.output.flush()).is_err() {
            return None;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(answer))
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read export folder");
                None
            }
        }
    }
}
