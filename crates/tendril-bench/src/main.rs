use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use tendril_bench::report;
use tendril_bench::runner::BenchmarkRunner;
use tendril_bench::scenes;

const USAGE: &str = "\
Usage: bench-runner [OPTIONS]
  --ticks <n>                   Ticks per scene (default: 600)
  --seed <n>                    World and tick RNG seed (default: 0)
  --output <path>               Save results as a JSON baseline
  --baseline <path>             Compare against a JSON baseline
  --regression-threshold <pct>  Allowed mean tick slowdown (default: 10)";

struct Options {
    ticks: u64,
    seed: u64,
    output: Option<PathBuf>,
    baseline: Option<PathBuf>,
    threshold: f64,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options {
        ticks: 600,
        seed: 0,
        output: None,
        baseline: None,
        threshold: 10.0,
    };
    while let Some(flag) = args.next() {
        if flag == "--help" || flag == "-h" {
            println!("{USAGE}");
            process::exit(0);
        }
        let value = args.next().ok_or_else(|| format!("{flag} needs a value"))?;
        match flag.as_str() {
            "--ticks" => opts.ticks = parse(&flag, &value)?,
            "--seed" => opts.seed = parse(&flag, &value)?,
            "--regression-threshold" => opts.threshold = parse(&flag, &value)?,
            "--output" => opts.output = Some(PathBuf::from(value)),
            "--baseline" => opts.baseline = Some(PathBuf::from(value)),
            _ => return Err(format!("unknown argument: {flag}")),
        }
    }
    Ok(opts)
}

fn parse<T: FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {flag} value '{value}'"))
}

fn fail(message: String) -> ! {
    log::error!("{message}");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args(std::env::args().skip(1))
        .unwrap_or_else(|e| fail(format!("{e}\n{USAGE}")));
    let runner = BenchmarkRunner::new(opts.ticks, opts.seed)
        .unwrap_or_else(|e| fail(format!("Failed to set up benchmark: {e}")));

    let results: Vec<_> = scenes::standard_scenes()
        .iter()
        .map(|scene| {
            runner
                .run_scene(scene)
                .unwrap_or_else(|e| fail(format!("Scene '{}' failed: {e}", scene.name)))
        })
        .collect();

    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(path) = &opts.output {
        let baseline = report::Baseline {
            label: format!("bench-{}", process::id()),
            seed: opts.seed,
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            fail(format!("Failed to save baseline to {}: {e}", path.display()));
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(path) = &opts.baseline {
        let Some(baseline) = report::load_baseline(path) else {
            log::warn!("Baseline file not found: {}", path.display());
            return;
        };
        if baseline.seed != opts.seed {
            log::warn!(
                "Baseline was recorded with seed {}, comparing against seed {}",
                baseline.seed,
                opts.seed
            );
        }
        let regressions = report::compare(&results, &baseline, opts.threshold);
        println!("{}", report::format_comparison(&regressions, opts.threshold));
        if !regressions.is_empty() {
            fail(format!("{} regressions detected", regressions.len()));
        }
    }

    log::info!("Benchmark complete.");
}
