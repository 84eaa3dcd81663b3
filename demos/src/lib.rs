//! Shared scenario logic for the gridnav terminal demo.
//!
//! A [`Demo`] owns a level, an agent following a path to a goal, and the
//! replanning loop: each [`tick`](Demo::tick) either moves the agent one
//! cell, or searches again first when the way ahead has been blocked.

use std::fmt::Write as _;

use gridnav_core::{
    CellMapping, Grid, GridError, Obstacle, Point, TerrainGen, TerrainKind, layered_pattern,
};
use gridnav_paths::{Path, PathFinder, PathFollower, SearchOptions, Step};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// World units per grid cell for the obstacle layout.
pub const CELL_SIZE: f32 = 20.0;

/// How the demo level is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// Deterministic water / rock / forest / grass pattern.
    Pattern,
    /// Open ground with randomly scattered rocks.
    Scatter,
    /// Rectangles and circles in world space, rasterised onto the grid.
    Obstacles,
}

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    pub layout: Layout,
    /// Rock density for [`Layout::Scatter`].
    pub density: f64,
    pub options: SearchOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            seed: 42,
            layout: Layout::Pattern,
            density: 0.2,
            options: SearchOptions::four(),
        }
    }
}

/// What happened during one [`Demo::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Moved(Point),
    /// The path ahead was blocked and a new one of this many cells was found.
    Replanned(usize),
    Arrived,
    /// No route to the goal exists any more.
    Stuck,
}

pub struct Demo {
    pub grid: Grid,
    finder: PathFinder,
    follower: PathFollower,
    goal: Point,
    rng: StdRng,
    replans: usize,
}

impl Demo {
    /// Build the level, pick start and goal, and plan the first path.
    pub fn new(cfg: &DemoConfig) -> Result<Self, GridError> {
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let grid = build_level(cfg, &mut rng)?;
        let mut tg = TerrainGen::with_grid(grid, rng);
        let start = tg.random_passable().unwrap_or(Point::ZERO);
        let goal = tg.random_passable().unwrap_or(start);
        let TerrainGen { rng, grid } = tg;

        let finder = PathFinder::new(cfg.options);
        let mut follower = PathFollower::new(start);
        if let Some(path) = finder.search(&grid, start, goal) {
            info!("planned {} cells from {start} to {goal}", path.len());
            follower.set_path(path);
        } else {
            info!("no path from {start} to {goal}");
        }
        Ok(Self {
            grid,
            finder,
            follower,
            goal,
            rng,
            replans: 0,
        })
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.follower.position()
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn path(&self) -> &Path {
        self.follower.path()
    }

    #[inline]
    pub fn replans(&self) -> usize {
        self.replans
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> Tick {
        if self.follower.next_blocked(&self.grid) {
            return self.replan();
        }
        match self.follower.advance() {
            Step::Moved(p) => Tick::Moved(p),
            Step::Arrived if self.position() == self.goal => Tick::Arrived,
            Step::Arrived => Tick::Stuck,
        }
    }

    /// Search again from the agent's current cell.
    pub fn replan(&mut self) -> Tick {
        self.replans += 1;
        match self.finder.search(&self.grid, self.position(), self.goal) {
            Some(path) => {
                let n = path.len();
                debug!("replanned from {}: {n} cells", self.position());
                self.follower.set_path(path);
                Tick::Replanned(n)
            }
            None => {
                self.follower.clear();
                Tick::Stuck
            }
        }
    }

    /// Drop a rock on a random not-yet-visited cell of the path, never the
    /// goal. Returns the blocked cell.
    pub fn drop_obstacle_ahead(&mut self) -> Option<Point> {
        let ahead: Vec<Point> = self
            .follower
            .remaining()
            .iter()
            .copied()
            .filter(|&p| p != self.goal)
            .collect();
        if ahead.is_empty() {
            return None;
        }
        let p = ahead[self.rng.random_range(0..ahead.len())];
        self.grid.set_terrain(p, TerrainKind::Rock);
        info!("rock dropped at {p}");
        Some(p)
    }

    /// The level as text: `@` agent, `G` goal, `*` cells still to walk.
    pub fn render(&self) -> String {
        let remaining = self.follower.remaining();
        let mut out = String::new();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let p = Point::new(x, y);
                let ch = if p == self.position() {
                    '@'
                } else if p == self.goal {
                    'G'
                } else if remaining.contains(&p) {
                    '*'
                } else {
                    self.grid.terrain(p).map_or(' ', TerrainKind::glyph)
                };
                out.push(ch);
            }
            let _ = writeln!(out);
        }
        out
    }
}

fn build_level(cfg: &DemoConfig, rng: &mut StdRng) -> Result<Grid, GridError> {
    match cfg.layout {
        Layout::Pattern => {
            let mut grid = Grid::from_dimensions(cfg.width, cfg.height, TerrainKind::Open)?;
            layered_pattern(&mut grid);
            Ok(grid)
        }
        Layout::Scatter => {
            let grid = Grid::from_dimensions(cfg.width, cfg.height, TerrainKind::Open)?;
            let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(rng.random()));
            tg.scatter(TerrainKind::Rock, cfg.density, &[]);
            Ok(tg.into_grid())
        }
        Layout::Obstacles => {
            let mapping = CellMapping::new(CELL_SIZE)?;
            let w = cfg.width as f32 * CELL_SIZE;
            let h = cfg.height as f32 * CELL_SIZE;
            let obstacles = [
                Obstacle::rect(w * 0.3, h * 0.35, CELL_SIZE * 2.0, h * 0.6),
                Obstacle::rect(w * 0.65, h * 0.7, CELL_SIZE * 2.0, h * 0.55),
                Obstacle::circle(w * 0.5, h * 0.2, CELL_SIZE * 3.0),
                Obstacle::circle(w * 0.85, h * 0.35, CELL_SIZE * 2.5),
            ];
            Grid::from_obstacles(cfg.width, cfg.height, mapping, &obstacles)
        }
    }
}
