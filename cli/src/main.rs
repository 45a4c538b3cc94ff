mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, generate};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg = commands.to_config();

    print::banner(cfg.no_banner, cfg.quiet);

    let result = generate::generate(&cfg);
    ExitCode::from(generate::exit_status(&result))
}
