use crate::error::BoundaryError;
use crate::simulation::LangtonsAnt;
use crate::utils::{cell_glyph, RULE_WIDTH};
use colored::Colorize;
use std::time::Duration;

/// Render the grid as plain text, one line per row, with the ant drawn by heading
pub fn render_grid(sim: &LangtonsAnt) -> String {
    let grid = sim.grid();
    let (ant_row, ant_col) = sim.position();
    let ant_glyph = sim.heading().glyph();

    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, &black) in row.iter().enumerate() {
            if r == ant_row && c == ant_col {
                out.push(ant_glyph);
            } else {
                out.push(cell_glyph(black));
            }
        }
        out.push('\n');
    }
    out
}

/// Print one animation frame: epoch header followed by the grid
pub fn print_frame(sim: &LangtonsAnt, epoch: u64) {
    println!("{} {}", "epoch:".bright_blue(), epoch);
    println!("{}", "=".repeat(RULE_WIDTH).bright_blue());
    print_grid(sim);
}

/// Print the grid with the ant highlighted
pub fn print_grid(sim: &LangtonsAnt) {
    let (ant_row, _) = sim.position();
    for (r, line) in render_grid(sim).lines().enumerate() {
        if r == ant_row {
            // The ant glyph is the only non-cell character on its row
            let colored: String = line
                .chars()
                .map(|ch| {
                    if ch == sim.heading().glyph() {
                        ch.to_string().yellow().bold().to_string()
                    } else {
                        ch.to_string()
                    }
                })
                .collect();
            println!("{}", colored);
        } else {
            println!("{}", line);
        }
    }
}

/// Report a run that a `Reject` boundary stopped early
pub fn print_halt(err: &BoundaryError) {
    println!("{} {}", "🚧".yellow(), format!("halted: {}", err).yellow());
}

/// Print simulation summary
pub fn print_summary(sim: &LangtonsAnt, requested: u64, simulation_time: Duration) {
    let (row, col) = sim.position();
    println!(
        "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Simulation Latency:".green().bold(),
        simulation_time.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("steps={}/{}", sim.steps(), requested).cyan(),
        format!("position=({}, {})", row, col).cyan(),
        format!("heading={}", sim.heading().as_str()).cyan(),
        format!("black={}", sim.grid().count_black()).cyan(),
        format!(
            "grid={}x{} boundary={}",
            sim.grid().rows(),
            sim.grid().cols(),
            sim.boundary().as_str()
        )
        .cyan(),
    );
}
