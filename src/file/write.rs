use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::MidiFile;
use crate::FileError;

/// A file could not be encoded or written out
#[derive(Debug, Error)]
pub enum WriteError {
    /// The file could not be encoded
    #[error("Encoding file: {0}")]
    Encode(#[from] FileError),
    /// The destination could not be opened
    #[error("Opening {path:?}: {source}")]
    Open {
        /// The destination
        path: PathBuf,
        /// Why it failed
        source: io::Error,
    },
    /// A writer passed to [`MidiFile::write_std`] failed
    #[error("Writing: {0}")]
    Io(#[source] io::Error),
    /// Writing the bytes failed
    #[error("Writing {path:?}: {source}")]
    Write {
        /// The destination
        path: PathBuf,
        /// Why it failed
        source: io::Error,
    },
}

impl MidiFile {
    /// Encodes the file and writes it to the given writer in one go.
    ///
    /// This function is only available with the `std` feature enabled.
    ///
    /// # Errors
    /// [`WriteError::Encode`] if the file cannot be encoded, [`WriteError::Io`]
    /// if the writer fails.
    pub fn write_std<W: Write>(&self, mut out: W) -> Result<(), WriteError> {
        let bytes = self.to_bytes()?;
        out.write_all(&bytes)
            .and_then(|()| out.flush())
            .map_err(WriteError::Io)
    }

    /// Encodes the file and writes it to `path`, replacing any existing file.
    ///
    /// The file is encoded before the destination is touched, so an
    /// encoding error leaves it unchanged.
    ///
    /// This function is only available with the `std` feature enabled.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        fn save_impl(file: &MidiFile, path: &Path) -> Result<(), WriteError> {
            let bytes = file.to_bytes()?;
            let dest = File::create(path).map_err(|source| WriteError::Open {
                path: path.to_path_buf(),
                source,
            })?;

            let mut out = BufWriter::new(dest);
            out.write_all(&bytes)
                .and_then(|()| out.flush())
                .map_err(|source| WriteError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;

            #[cfg(feature = "tracing")]
            tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
            Ok(())
        }
        save_impl(self, path.as_ref())
    }
}
