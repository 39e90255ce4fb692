//! Seat Chart entry point
//!
//! Builds the chart once, then either dumps it as JSON or prints the tooltip
//! label for each seat index given on the command line.

use anyhow::Context;

use seat_chart::consts::PAGE_TITLE;
use seat_chart::hover::seat_label;
use seat_chart::{SeatChart, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("{PAGE_TITLE} seat chart starting...");

    let settings = Settings::load();
    let chart = SeatChart::standard().context("venue geometry is inconsistent")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    for arg in &args {
        let index: usize = arg
            .parse()
            .with_context(|| format!("invalid seat index: {arg}"))?;
        if chart.seat(index).is_none() {
            log::warn!("Seat index {index} is outside the chart ({} seats)", chart.len());
        }
        println!("{index}\t{}", seat_label(&chart, &settings, index));
    }

    Ok(())
}
