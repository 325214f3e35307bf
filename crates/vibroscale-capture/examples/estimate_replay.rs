//! Replay a recorded CSV capture through the fitted models
//!
//! Usage: cargo run --example estimate_replay -- path/to/recording.csv
//!
//! Accepts the mobile recorder's CSV layout: one comma-separated row per
//! axis (x first, optional y row ignored, z last).

use vibroscale_capture::replay::read_recording;
use vibroscale_capture::report::format_report;
use vibroscale_core::estimation::estimate_all;
use vibroscale_core::model::ModelTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: estimate_replay <recording.csv>")?;

    let recording = read_recording(&path)?;
    println!(
        "Replayed {} samples per axis from {}\n",
        recording.len(),
        path
    );

    let table = ModelTable::standard();
    let predictions = estimate_all(&recording, &table)?;
    print!("{}", format_report(&predictions));

    Ok(())
}
