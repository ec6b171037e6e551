use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use maze_solver::maze::generator::{self, DEFAULT_SEED, DEFAULT_WALL_RATIO};
use maze_solver::{solve_all, Maze, Strategy};

fn make_options_parser() -> Command {
    Command::new("maze-solver")
        .version("v0.1.0")
        .about("Solve a text maze with depth-first and breadth-first search")
        .arg(
            Arg::new("maze")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .required_unless_present("random")
                .help("Maze file: `<rows> <cols>` header, then `#` walls, `A` start, `B` end"),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .default_value("both")
                .value_parser(["dfs", "bfs", "both"])
                .help("Traversal to run; `both` runs DFS, resets, then BFS"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print one JSON object per traversal"),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .value_name("ROWSxCOLS")
                .conflicts_with("maze")
                .help("Solve a generated maze instead of reading a file"),
        )
        .arg(
            Arg::new("wall-ratio")
                .long("wall-ratio")
                .value_parser(clap::value_parser!(f64))
                .requires("random")
                .help("Probability that a generated cell is a wall (default 0.3)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .requires("random")
                .help("Seed of the generated maze (default 0)"),
        )
}

fn parse_dimensions(s: &str) -> Result<(usize, usize)> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("invalid dimensions `{}`, expected ROWSxCOLS", s))?;
    let rows = rows.trim().parse::<usize>().context("invalid row count")?;
    let cols = cols.trim().parse::<usize>().context("invalid column count")?;
    Ok((rows, cols))
}

fn load_maze(matches: &ArgMatches) -> Result<Maze> {
    if let Some(dims) = matches.get_one::<String>("random") {
        let (rows, cols) = parse_dimensions(dims)?;
        let ratio = matches
            .get_one::<f64>("wall-ratio")
            .copied()
            .unwrap_or(DEFAULT_WALL_RATIO);
        let seed = matches
            .get_one::<u64>("seed")
            .copied()
            .unwrap_or(DEFAULT_SEED);
        return Ok(generator::generate(rows, cols, ratio, seed)?);
    }

    let Some(path) = matches.get_one::<PathBuf>("maze") else {
        bail!("no maze file given");
    };
    Maze::load(path).with_context(|| format!("failed to load maze from {}", path.display()))
}

fn strategies(matches: &ArgMatches) -> Result<Vec<Strategy>> {
    match matches.get_one::<String>("strategy").map(String::as_str) {
        None | Some("both") => Ok(vec![Strategy::DepthFirst, Strategy::BreadthFirst]),
        Some(name) => {
            let strategy = name.parse::<Strategy>().map_err(anyhow::Error::msg)?;
            Ok(vec![strategy])
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut maze = load_maze(matches)?;
    let json = matches.get_flag("json");
    let strategies = strategies(matches)?;

    solve_all(&mut maze, &strategies, |maze, report| {
        if json {
            println!("{}", report.to_json());
        } else {
            println!("{}", report.to_text(maze));
        }
    });
    Ok(())
}

fn main() -> ExitCode {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = make_options_parser().get_matches();
    log::debug!("options: {:?}", matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
