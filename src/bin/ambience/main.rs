//! ambience - procedural focus soundscapes in the terminal
//!
//! Run with: cargo run --bin ambience -- --generator rain

mod app;
mod player;
mod ui;

use ambience_dsp::GeneratorType;
use app::Ambience;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Procedural ambience for study sessions")]
struct Args {
    /// Soundscape: white-noise, rain, forest, waves or lofi-study
    #[arg(short, long, default_value = "rain")]
    generator: GeneratorType,

    /// Starting volume, 0 to 1
    #[arg(short, long, default_value_t = 0.5)]
    volume: f32,

    /// Samples per generated buffer (interleaved stereo)
    #[arg(short, long, default_value_t = 2_048)]
    buffer: usize,

    /// Ask the device for this sample rate instead of its default
    #[arg(long)]
    sample_rate: Option<u32>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();

    let mut app = Ambience::new()
        .generator(args.generator)
        .volume(args.volume)
        .buffer(args.buffer);
    if let Some(rate) = args.sample_rate {
        app = app.sample_rate(rate);
    }
    app.run()
}
