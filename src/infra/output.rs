// ============================================================
// Layer 6 — Output Writer
// ============================================================
// Sends rendered results to stdout, or to a file when a path is
// given. Logging goes to stderr, so stdout only ever carries
// the result itself.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

pub struct OutputWriter {
    /// None → stdout
    path: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(path: Option<impl Into<PathBuf>>) -> Self {
        Self { path: path.map(Into::into) }
    }

    /// Write `text` followed by a single newline.
    pub fn write(&self, text: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                fs::write(path, format!("{text}\n"))
                    .with_context(|| format!("Cannot write output to '{}'", path.display()))?;
                tracing::debug!("Wrote {} bytes to '{}'", text.len() + 1, path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}").context("Cannot write to stdout")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_to_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        OutputWriter::new(Some(&path)).write("id,name,options,points,published").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "id,name,options,points,published\n"
        );
    }
}
