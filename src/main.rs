use std::time::{Duration, Instant};

use tracing::info;
use tracing_subscriber::EnvFilter;

use pmm::config::{Config, Mode};
use pmm::{generator, Matrix, Multiplier, Strategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let mut rng = match config.seed {
        Some(seed) => generator::seeded_rng(seed),
        None => generator::time_seeded_rng(),
    };
    info!(size = config.size, mode = ?config.mode, seed = ?config.seed, "generating matrices");
    let a = generator::generate(config.size, config.size, &mut rng);
    let b = generator::generate(config.size, config.size, &mut rng);

    match config.mode {
        Mode::Single(strategy) => {
            let (c, elapsed) = timed(strategy, &a, &b)?;
            report(&c);
            println!("Time taken to multiply matrices ({}): {:?}", strategy, elapsed);
        }
        Mode::Compare => {
            let (seq, seq_time) = timed(Strategy::Sequential, &a, &b)?;
            let (par, par_time) = timed(Strategy::default(), &a, &b)?;
            if seq != par {
                return Err("parallel result differs from sequential result".into());
            }
            report(&par);
            println!("Sequential:  {:?}", seq_time);
            println!("Parallel:    {:?}", par_time);
            println!(
                "Speedup:     {:.2}x",
                seq_time.as_secs_f64() / par_time.as_secs_f64().max(f64::EPSILON)
            );
        }
    }

    Ok(())
}

fn timed(strategy: Strategy, a: &Matrix, b: &Matrix) -> pmm::Result<(Matrix, Duration)> {
    let start = Instant::now();
    let c = Multiplier::new(strategy).multiply(a, b)?;
    let elapsed = start.elapsed();
    info!(%strategy, ?elapsed, "multiplication finished");
    Ok((c, elapsed))
}

fn report(c: &Matrix) {
    if c.is_empty() {
        println!("{:?} (empty)", c.dim());
    } else {
        println!("{}", c.get(0, 0));
    }
}
