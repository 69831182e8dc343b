use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Write one mutation per line, each `\n` terminated.
pub fn write_mutations<W: Write>(mut writer: W, mutations: &[String]) -> Result<(), OutputError> {
    for mutation in mutations {
        writer.write_all(mutation.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `mutations` into it.
pub fn write_results(path: &Path, mutations: &[String]) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_mutations(BufWriter::new(file), mutations)?;
    info!(path = %path.display(), count = mutations.len(), "wrote mutations");
    Ok(())
}
