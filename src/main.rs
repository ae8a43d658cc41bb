use log::{error, info};
use std::io;
use std::process::ExitCode;
use wordle_sieve::cli::{Cli, CliInterface, parse_cli, parse_steps};
use wordle_sieve::config::Config;
use wordle_sieve::logging::init_logging;
use wordle_sieve::report::SolveReport;
use wordle_sieve::solver::Solver;
use wordle_sieve::tui::TuiInterface;
use wordle_sieve::wordbank::{load_history_payload, load_pools};
use wordle_sieve::{WordbankError, game_loop};

const EXIT_IO: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = parse_cli();
    let config = Config::from_cli(&cli);
    if let Err(e) = init_logging(config.verbose, config.log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
    }

    let (answers, allowed) = match load_pools(&config) {
        Ok(pools) => pools,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::from(EXIT_IO);
        }
    };
    let solver = Solver::new(answers, allowed);

    if cli.is_one_shot() {
        return run_one_shot(&cli, &config, &solver);
    }

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&solver, config.limits, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal UI: {e}");
                return ExitCode::from(EXIT_IO);
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&solver, config.limits, &mut interface);
    }
    ExitCode::SUCCESS
}

fn run_one_shot(cli: &Cli, config: &Config, solver: &Solver) -> ExitCode {
    let solution = match &cli.history_file {
        Some(path) => match load_history_payload(path) {
            Ok(payload) => solver.solve_raw(&payload.history),
            Err(e) => {
                eprintln!("{e}");
                return match e {
                    WordbankError::HistoryFile { .. } => ExitCode::from(EXIT_INVALID_INPUT),
                    WordbankError::Io { .. } | WordbankError::HistoryRead { .. } => {
                        error!("{e}");
                        ExitCode::from(EXIT_IO)
                    }
                };
            }
        },
        None => parse_steps(&cli.steps).map(|history| solver.solve(&history)),
    };

    let solution = match solution {
        Ok(solution) => solution,
        Err(e) => {
            info!("rejected request: {e}");
            eprintln!("{e}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let report = SolveReport::new(&solution, &config.limits);
    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode report: {e}");
                return ExitCode::from(EXIT_IO);
            }
        }
    } else {
        println!("{report}");
    }
    ExitCode::SUCCESS
}
