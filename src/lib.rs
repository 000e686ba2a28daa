pub mod cli;
pub mod disassemble;
pub mod error;
pub mod logger;
pub mod parameters;
pub mod payload;
pub mod scratch;

pub use crate::{
    disassemble::{dump_and_disassemble, Disassembler},
    error::DumpError,
    payload::Payload,
    scratch::{with_scratch_file, ScratchFile},
};
