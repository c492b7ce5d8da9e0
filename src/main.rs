use std::io;
use std::process;

use clap::Parser;

use check_value_from_metrics::cli::{self, Cli};
use check_value_from_metrics::{Config, Evaluator, Report, USAGE_EXIT_CODE};

fn main() {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version end up here as well
            let code = if err.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    cli::init_tracing(cli.log_level);

    let config = match Config::try_from(cli.raw_options()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(USAGE_EXIT_CODE);
        }
    };

    let result = Evaluator::new(&config).evaluate(io::stdin().lock());
    Report::new(&cli.name, result).print_and_exit()
}
