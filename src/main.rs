use clap::Parser;
use cubeturner_midi::{
    bridge::{self, Outcome},
    logging, Args, BridgeError, Config,
};

fn main() {
    let args = parse_command_line_arguments();
    initialize_logging(args.verbose);
    let config = Config::from_args(args);

    let code = match bridge::run(&config) {
        Ok(outcome) => {
            report_outcome(outcome);
            0
        }
        Err(error) => report_error(&error),
    };

    log::info!("Exiting with status {}", code);
    std::process::exit(code);
}

fn parse_command_line_arguments() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

fn initialize_logging(verbose: bool) {
    if let Err(e) = logging::init_logger(verbose) {
        eprintln!("Logger initialization failed: {}", e);
    }
    log::info!("Application starting");
}

fn report_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Listed => log::debug!("Listing printed"),
        Outcome::Interrupted => log::info!("Interrupted, shut down cleanly"),
        Outcome::EndOfInput => log::info!("Input ended, shut down cleanly"),
    }
}

fn report_error(error: &BridgeError) -> i32 {
    log::error!("{}", error);
    bridge::report_error(&mut std::io::stderr().lock(), error)
}
