use std::time::Instant;

use tendril_core::config::{load_config_from_str, SpreaderConfig};
use tendril_core::error::ConfigError;
use tendril_rules::{
    build_registry, default_catalog, validate_catalog, validate_replaceable_set, world_for,
    BlockCatalog, CapabilityRole, CatalogError,
};
use tendril_persist::{load_cursors, save_cursors, PersistError};
use tendril_sim::{tick_rng, Spreader};

use crate::scenes::{build_floor, FloorKinds, SceneConfig, SpreadMode};

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("catalog failed validation with {0} errors")]
    InvalidCatalog(usize),
    #[error("catalog has no block named '{0}'")]
    MissingBlock(&'static str),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub tick_count: u64,
    /// Substrate cells present at the end of the run.
    pub converted_cells: usize,
    pub peak_cursors: usize,
    pub events_emitted: usize,
    #[serde(default)]
    pub loaded_chunks: u32,
    #[serde(default)]
    pub active_chunks: u32,
    pub timings: TimingSeries,
}

/// Runs the spreader over generated scenes on the CPU.
pub struct BenchmarkRunner {
    tick_count: u64,
    seed: u64,
    catalog: BlockCatalog,
    level: SpreaderConfig,
    world_generation: SpreaderConfig,
}

impl BenchmarkRunner {
    /// Load and validate the bundled catalog and spreader configs.
    pub fn new(tick_count: u64, seed: u64) -> Result<Self, BenchError> {
        let catalog = default_catalog()?;
        if let Err(errors) = validate_catalog(&catalog) {
            for e in &errors {
                log::error!("Catalog validation error: {e}");
            }
            return Err(BenchError::InvalidCatalog(errors.len()));
        }

        let level = load_config_from_str(include_str!("../../../data/spreader_level.ron"))?;
        let world_generation =
            load_config_from_str(include_str!("../../../data/spreader_worldgen.ron"))?;
        for config in [&level, &world_generation] {
            if let Err(errors) = validate_replaceable_set(&config.replaceable_set, &catalog) {
                for e in &errors {
                    log::error!("Config validation error: {e}");
                }
                return Err(BenchError::InvalidCatalog(errors.len()));
            }
        }
        log::info!(
            "Loaded {} block kinds, seed {seed}, {tick_count} ticks per scene",
            catalog.len()
        );

        Ok(Self {
            tick_count,
            seed,
            catalog,
            level,
            world_generation,
        })
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, scene: &SceneConfig) -> Result<BenchmarkResult, BenchError> {
        log::info!("Running scene '{}'...", scene.name);

        let config = match scene.mode {
            SpreadMode::Level => &self.level,
            SpreadMode::WorldGeneration => &self.world_generation,
        };
        let blocks = build_registry(&self.catalog, config)?;
        let kinds = FloorKinds {
            fill: self
                .catalog
                .kind_of("stone")
                .ok_or(BenchError::MissingBlock("stone"))?,
            top: self
                .catalog
                .kind_of("dirt")
                .ok_or(BenchError::MissingBlock("dirt"))?,
        };

        let mut world = world_for(&self.catalog);
        let origin = build_floor(&mut world, scene, self.seed, kinds);
        if let Some(radius) = scene.simulation_radius {
            world.apply_simulation_distance(origin, radius);
        }
        let mut spreader = Spreader::new(config.clone());

        let mut frame_times = Vec::with_capacity(self.tick_count as usize);
        let mut peak_cursors = 0;
        let mut events_emitted = 0;

        for tick in 0..self.tick_count {
            if scene.bursts_on(tick) {
                spreader.add_charge(origin, scene.burst_charge);
            }
            if scene.checkpoint_tick == Some(tick) {
                let document = save_cursors(&spreader)?;
                let report = load_cursors(&mut spreader, &document)?;
                log::info!(
                    "  Checkpoint at tick {tick}: {} cursors, {} bytes",
                    report.loaded,
                    document.len()
                );
            }

            let mut rng = tick_rng(self.seed, origin, tick);
            let frame_start = Instant::now();
            spreader.update_cursors(&mut world, &blocks, origin, &mut rng, true);
            frame_times.push(frame_start.elapsed().as_secs_f64() * 1000.0);

            peak_cursors = peak_cursors.max(spreader.cursors().len());
            events_emitted += world.drain_events().len();
            world.advance_tick();
        }

        let converted_cells: usize = self
            .catalog
            .kinds_with_role(CapabilityRole::Substrate)
            .into_iter()
            .map(|kind| world.count_kind(kind))
            .sum();

        let (loaded_chunks, active_chunks, _) = world.chunk_counts();
        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: {} converted, peak {} cursors, mean={:.3}ms, p99={:.3}ms",
            converted_cells,
            peak_cursors,
            timings.mean_ms,
            timings.p99_ms
        );

        Ok(BenchmarkResult {
            scene_name: scene.name.to_string(),
            tick_count: self.tick_count,
            converted_cells,
            peak_cursors,
            events_emitted,
            loaded_chunks,
            active_chunks,
            timings,
        })
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
