//! Listen to a sort: shuffles `0..length` and sorts it out loud.
//!
//! Run with: cargo run --example sort_demo -- --algorithm shell --length 40

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use musicalsort::tone::{self, CpalEmitter, SharedEmitter};
use musicalsort::{Algorithm, Config, Error, Musician};
use rand::seq::SliceRandom;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "sort_demo", version, about = "Hear a sorting algorithm at work")]
struct Args {
    /// selection, insertion, bubble, shell, merge or quick
    #[arg(short, long, default_value = "selection")]
    algorithm: Algorithm,

    /// Number of elements to sort
    #[arg(short, long, default_value_t = 32)]
    length: u32,

    /// Length of each tone in milliseconds
    #[arg(short, long, default_value_t = 50)]
    duration_ms: u64,

    /// Lowest pitch in Hz
    #[arg(long, default_value_t = 200.0)]
    min: f32,

    /// Highest pitch in Hz
    #[arg(long, default_value_t = 2000.0)]
    max: f32,

    /// Don't open an audio device; only log
    #[arg(long)]
    silent: bool,

    /// More output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Error>() {
                Some(Error::NoAudioBackend { remediation }) => {
                    eprintln!("[-] Can't play any sound.\n    {remediation}");
                    eprintln!("    Pass --silent to run the sort without audio.");
                }
                _ => eprintln!("[-] Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::default()
        .with_range(args.min, args.max)
        .with_duration(Duration::from_millis(args.duration_ms));
    config.validate()?;

    let emitter: SharedEmitter = if args.silent {
        tone::share(tone::Silent)
    } else {
        tone::share(CpalEmitter::probe_with(&config)?)
    };
    let musician = Musician::new(emitter, config)?;

    let mut data: Vec<u32> = (0..args.length).collect();
    data.shuffle(&mut rand::thread_rng());
    println!("[*] {} sort of {:?}", args.algorithm, data);

    let sorted = musician.sort(data, args.algorithm)?;
    println!("[*] sorted: {:?}", sorted);
    Ok(())
}
