use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("refusing to disassemble an empty payload")]
    EmptyPayload,

    #[error("invalid byte {token:?}, expected a hex value between 00 and ff")]
    InvalidByte { token: String },

    #[error("could not prepare scratch file: {0}")]
    ScratchFile(#[source] io::Error),

    #[error("{tool} not found, is it installed and on PATH?")]
    ToolNotFound { tool: String },

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("could not remove scratch file: {0}")]
    Cleanup(#[source] io::Error),
}
