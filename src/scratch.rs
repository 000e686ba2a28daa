use crate::{error::DumpError, payload::Payload};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

/// A uniquely named temporary file holding one payload.
///
/// The file is deleted when the value is dropped. `close` does the same but
/// reports a failed deletion instead of swallowing it.
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    pub fn create(payload: &Payload) -> Result<Self, DumpError> {
        let mut file = tempfile::Builder::new()
            .prefix("disassemble-hexdump-")
            .suffix(".bin")
            .tempfile()
            .map_err(DumpError::ScratchFile)?;

        file.write_all(payload.as_bytes())
            .map_err(DumpError::ScratchFile)?;
        file.flush().map_err(DumpError::ScratchFile)?;

        // objdump opens the file by path, the data has to be there first
        file.as_file().sync_all().map_err(DumpError::ScratchFile)?;

        log::debug!(
            "wrote {} bytes to {}",
            payload.len(),
            file.path().display()
        );

        Ok(ScratchFile { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn close(self) -> Result<(), DumpError> {
        let path = self.file.path().to_path_buf();
        self.file.close().map_err(DumpError::Cleanup)?;
        log::debug!("removed {}", path.display());
        Ok(())
    }
}

/// Writes `payload` to a fresh scratch file and hands its path to `f`.
///
/// The file is removed afterwards whether `f` succeeds or not. When `f`
/// fails its error wins over a failed cleanup.
pub fn with_scratch_file<F, T>(payload: &Payload, f: F) -> Result<T, DumpError>
where
    F: FnOnce(&Path) -> Result<T, DumpError>,
{
    let scratch = ScratchFile::create(payload)?;

    match f(scratch.path()) {
        Ok(value) => {
            scratch.close()?;
            Ok(value)
        }
        Err(error) => {
            if let Err(cleanup) = scratch.close() {
                log::warn!("{}", cleanup);
            }
            Err(error)
        }
    }
}
