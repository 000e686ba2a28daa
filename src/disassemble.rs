use crate::{
    error::DumpError,
    parameters::syntax::Syntax,
    payload::Payload,
    scratch::with_scratch_file,
};
use std::{
    io::ErrorKind,
    path::Path,
    process::{Command, ExitStatus},
};

pub const DEFAULT_TOOL: &str = "objdump";

/// The only machine we decode for.
pub const MACHINE: &str = "i386:x86-64";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Disassembler {
    pub tool: String,
    pub syntax: Syntax,
}

impl Default for Disassembler {
    fn default() -> Self {
        Disassembler {
            tool: DEFAULT_TOOL.to_string(),
            syntax: Syntax::default(),
        }
    }
}

impl Disassembler {
    pub fn command<P>(&self, path: P) -> Command
    where
        P: AsRef<Path>,
    {
        let mut command = Command::new(&self.tool);

        command.args(&[
            //
            // No container format, just bytes
            "-b",
            "binary",
            //
            // Target machine
            "-m",
            MACHINE,
            //
            // Disassemble everything, raw files have no code sections
            "-D",
        ]);

        if let Some(option) = self.syntax.objdump_option() {
            command.arg("-M").arg(option);
        }

        command.arg(path.as_ref());
        command
    }

    /// Runs the disassembler on `path` and waits for it.
    ///
    /// Output goes straight to our stdout/stderr. A non-zero exit is
    /// returned as is, the tool has already said what went wrong.
    pub fn run<P>(&self, path: P) -> Result<ExitStatus, DumpError>
    where
        P: AsRef<Path>,
    {
        let mut command = self.command(path);
        log::info!("running {:?}", command);

        let status = command.status().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DumpError::ToolNotFound {
                    tool: self.tool.clone(),
                }
            } else {
                DumpError::Spawn {
                    tool: self.tool.clone(),
                    source,
                }
            }
        })?;

        if !status.success() {
            log::warn!("{} exited with {}", self.tool, status);
        }

        Ok(status)
    }

    pub fn dump_and_disassemble(
        &self,
        payload: &Payload,
    ) -> Result<ExitStatus, DumpError> {
        with_scratch_file(payload, |path| self.run(path))
    }
}

/// Disassembles `payload` with plain `objdump` from PATH.
pub fn dump_and_disassemble(payload: &[u8]) -> Result<ExitStatus, DumpError> {
    Disassembler::default().dump_and_disassemble(&Payload::new(payload)?)
}
