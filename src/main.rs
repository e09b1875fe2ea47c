use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;

use u_coloring::coloring::{color_graph, ColoringConfig, CostFunction};
use u_coloring::ga::Selection;
use u_coloring::io::{format_coloring, read_edge_list};

// Run:
// cargo run --release -- data/gc_1000.txt --generations 200 --seed 42

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Edge-list file: vertex count, then 1-indexed vertex pairs.
    #[arg(value_name = "FILE")]
    path_graph: PathBuf,

    /// Number of available colors (defaults to the vertex count).
    #[arg(long = "colors", value_name = "INT")]
    color_count: Option<usize>,

    /// Population size.
    #[arg(long = "population", value_name = "INT", default_value_t = 25)]
    population_size: usize,

    /// Number of generations.
    #[arg(long = "generations", value_name = "INT", default_value_t = 100)]
    max_generations: usize,

    /// Random seed (defaults to the wall clock).
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Cost minimized by the search.
    #[arg(long, value_enum, default_value_t = CostArg::Greedy)]
    cost: CostArg,

    /// Use tournament selection of this size instead of uniform selection.
    #[arg(long, value_name = "INT")]
    tournament: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CostArg {
    /// Colors used by a greedy largest-degree-first coloring.
    Greedy,
    /// Edges whose endpoints share a color.
    Conflicts,
}

impl From<CostArg> for CostFunction {
    fn from(arg: CostArg) -> Self {
        match arg {
            CostArg::Greedy => CostFunction::GreedyDegree,
            CostArg::Conflicts => CostFunction::Conflicts,
        }
    }
}

impl Cli {
    fn config(&self) -> ColoringConfig {
        let mut config = ColoringConfig::default()
            .with_cost_function(self.cost.into())
            .with_population_size(self.population_size)
            .with_max_generations(self.max_generations);
        if let Some(k) = self.color_count {
            config = config.with_color_count(k);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(k) = self.tournament {
            config = config.with_selection(Selection::Tournament(k));
        }
        config
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start_time = Instant::now();
    let args = Cli::parse();
    info!("args = {:?}", args);

    let graph = read_edge_list(&args.path_graph)?;
    let result = color_graph(&graph, &args.config())?;

    print!("{}", format_coloring(&result.best, result.cost));
    info!(
        "conflicts = {} (proper: {}), seed = {}, done in {:.3} s",
        result.conflicts,
        result.is_proper(),
        result.seed,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
