use clap::Parser;
use langtons_ant::prelude::*;
use langtons_ant::render;
use langtons_ant::utils::CLEAR_SCREEN;
use std::io::Write;
use std::time::{Duration, Instant};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Build grid and engine
    let grid = args.load_grid()?;
    let mut sim = LangtonsAnt::new(grid, args.simulation_config(&mut rng))?;

    // Run simulation
    let sim_start = Instant::now();
    let outcome = if args.animate {
        animate(&mut sim, &args)
    } else {
        sim.run(args.epochs)
    };
    let simulation_time = sim_start.elapsed();

    match outcome {
        Ok(()) => {}
        Err(SimError::Boundary(err)) => render::print_halt(&err),
        Err(err) => return Err(err.into()),
    }

    // Print results
    if !args.quiet && !args.animate {
        render::print_grid(&sim);
    }
    render::print_summary(&sim, args.epochs, simulation_time);

    Ok(())
}

/// Draw, wait, step; once per epoch
fn animate(sim: &mut LangtonsAnt, args: &Args) -> Result<()> {
    let delay = Duration::from_millis(args.delay_ms);
    for epoch in 1..=args.epochs {
        if !args.no_clear {
            print!("{}", CLEAR_SCREEN);
        }
        render::print_frame(sim, epoch);
        std::io::stdout().flush()?;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        sim.step()?;
    }
    Ok(())
}
