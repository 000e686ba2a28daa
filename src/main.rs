use disassemble_hexdump::{
    cli::{Cli, Command},
    logger,
    parameters::Parameters,
    payload::{find_sample, parse_bytes, SAMPLES},
    Payload,
};
use std::error::Error;
use structopt::StructOpt;

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    logger::init(logger::level_filter(cli.verbose, cli.quiet))?;

    let mut parameters = Parameters::from_env();
    parameters.apply_cli(cli.command.get_disassemble_args());

    let disassembler = parameters.disassembler();

    match &cli.command {
        Command::Samples(args) => {
            let samples = match &args.only {
                Some(name) => vec![find_sample(name).ok_or_else(|| {
                    format!("no sample named {:?}", name)
                })?],
                None => SAMPLES.iter().collect(),
            };

            for sample in samples {
                println!("\n{}:", sample.name);
                let payload = Payload::new(sample.bytes)?;
                disassembler.dump_and_disassemble(&payload)?;
            }
        }
        Command::Bytes(args) => {
            let bytes = parse_bytes(&args.bytes)?;
            disassembler.dump_and_disassemble(&Payload::new(&bytes)?)?;
        }
    }

    Ok(())
}

pub fn main() {
    let cli: Cli = StructOpt::from_args();

    if let Err(error) = run(&cli) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}
