use structopt::*;

#[derive(Debug, Default, StructOpt)]
pub struct DisassembleArgs {
    #[structopt(long, help = "Print instructions in Intel syntax")]
    pub intel: bool,

    #[structopt(long, help = "objdump binary to run instead of `objdump`")]
    pub objdump: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct SamplesArgs {
    #[structopt(flatten)]
    pub disassemble: DisassembleArgs,

    #[structopt(long, help = "Only disassemble the sample with this name")]
    pub only: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct BytesArgs {
    #[structopt(flatten)]
    pub disassemble: DisassembleArgs,

    #[structopt(
        required = true,
        help = "Hex bytes, e.g. `0x55 0x48 0x89 0xe5` or `55,48,89,e5`"
    )]
    pub bytes: Vec<String>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "Disassemble the built in sample snippets")]
    Samples(SamplesArgs),

    #[structopt(about = "Disassemble bytes given on the command line")]
    Bytes(BytesArgs),
}

impl Command {
    pub fn get_disassemble_args(&self) -> &DisassembleArgs {
        match self {
            Command::Samples(s) => &s.disassemble,
            Command::Bytes(b) => &b.disassemble,
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "disassemble-hexdump",
    about = "Run objdump on raw x86-64 machine code via a scratch file"
)]
pub struct Cli {
    #[structopt(
        short,
        long,
        global = true,
        parse(from_occurrences),
        help = "More log output, repeat for more"
    )]
    pub verbose: u8,

    #[structopt(short, long, global = true, help = "No log output")]
    pub quiet: bool,

    #[structopt(subcommand)]
    pub command: Command,
}
