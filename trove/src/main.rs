use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use rand::RngExt;
use trove_core::Grid;

use trove_lib::cli::SearchChoice;
use trove_lib::{Args, Renderer, Session, interactive};

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("trove: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut session = match &args.layout {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Session::fixed(Grid::from_layout(&text)?)
        }
        None => {
            let seed = args.seed.unwrap_or_else(|| rand::rng().random());
            log::info!("generating a {0}x{0} grid with seed {seed}", args.size);
            Session::generate(args.gen_config(), seed)?
        }
    };

    if args.interactive {
        interactive::run(&mut session, !args.no_color)?;
        return Ok(());
    }

    let renderer = if args.no_color {
        Renderer::plain()
    } else {
        Renderer::colored()
    };
    let reports = match args.algorithm {
        SearchChoice::All => session.run_all(),
        SearchChoice::Tour => session.run_tour().into_iter().collect(),
        choice => choice
            .algorithm()
            .and_then(|a| session.run(a))
            .into_iter()
            .collect(),
    };

    let mut stdout = io::stdout().lock();
    renderer.grid(&mut stdout, session.grid(), &[])?;
    for r in &reports {
        writeln!(stdout)?;
        let goals: Vec<String> = r.goals.iter().map(ToString::to_string).collect();
        writeln!(stdout, "{} -> {}", r.label, goals.join(" "))?;
        renderer.grid(&mut stdout, session.grid(), r.result.path())?;
    }
    writeln!(stdout)?;
    renderer.table(&mut stdout, &reports)?;
    stdout.flush()?;
    Ok(())
}
