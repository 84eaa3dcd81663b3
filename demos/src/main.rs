//! Terminal demo: an agent walks an A* path across a generated level,
//! a rock lands in its way partway through, and it replans.

use clap::Parser;
use gridnav_demos::{Demo, DemoConfig, Layout, Tick};
use gridnav_paths::{Heuristic, SearchOptions};
use log::info;

/// Command line arguments for the gridnav demo.
#[derive(Parser, Debug)]
#[command(name = "gridnav-demo")]
#[command(about = "Grid A* pathfinding with replanning")]
#[command(version)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 30)]
    height: i32,

    /// Random seed for level generation and endpoint choice
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Level layout
    #[arg(long, value_enum, default_value = "pattern")]
    layout: Layout,

    /// Rock density for the scatter layout, between 0 and 1
    #[arg(long, default_value_t = 0.2, value_parser = parse_density)]
    density: f64,

    /// Allow diagonal moves
    #[arg(short, long)]
    diagonal: bool,

    /// Forbid diagonal moves that squeeze past a blocked corner
    #[arg(long)]
    strict_corners: bool,

    /// Heuristic (manhattan, euclidean, octile)
    #[arg(long, value_enum)]
    heuristic: Option<HeuristicArg>,

    /// Print every frame rather than only the first and last
    #[arg(long)]
    frames: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Euclidean,
    Octile,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("density must be between 0 and 1, got {s}"))
    }
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Euclidean => Heuristic::Euclidean,
            HeuristicArg::Octile => Heuristic::Octile,
        }
    }
}

impl Args {
    fn search_options(&self) -> SearchOptions {
        let mut opts = if self.diagonal {
            SearchOptions::eight()
        } else {
            SearchOptions::four()
        };
        if let Some(h) = self.heuristic {
            opts = opts.with_heuristic(h.into());
        }
        opts.with_corner_cutting(!self.strict_corners)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let options = args.search_options();
    info!(
        "{}x{} {:?} level, seed {}, {:?} movement, {} heuristic",
        args.width, args.height, args.layout, args.seed, options.connectivity, options.heuristic
    );
    let cfg = DemoConfig {
        width: args.width,
        height: args.height,
        seed: args.seed,
        layout: args.layout,
        density: args.density,
        options,
    };
    let mut demo = Demo::new(&cfg)?;
    println!("{}", demo.render());

    let drop_at = demo.path().len() / 2;
    let max_ticks = demo.grid.len() * 4;
    let mut ticks = 0;
    let outcome = loop {
        if ticks == drop_at {
            demo.drop_obstacle_ahead();
        }
        let tick = demo.tick();
        ticks += 1;
        if args.frames {
            println!("{}", demo.render());
        }
        match tick {
            Tick::Arrived | Tick::Stuck => break tick,
            _ if ticks >= max_ticks => break Tick::Stuck,
            _ => {}
        }
    };

    if !args.frames {
        println!("{}", demo.render());
    }
    info!(
        "{:?} at {} after {ticks} ticks and {} replans",
        outcome,
        demo.position(),
        demo.replans()
    );
    Ok(())
}
