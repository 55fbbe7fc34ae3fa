//! Hosted entry point for a measurement run.
//!
//! Mirrors a firmware boot entry: one run over the compiled-in vector,
//! exiting with the final decryption's status. Schedule parameters can be
//! overridden for bench work, but the sequencing is fixed.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use scopegate::{
    output, Config, GcmDecryptor, Harness, HostDelay, NullTrigger, BUILTIN_VECTOR,
};

#[derive(Parser, Debug)]
#[command(version, about = "Trigger-bracketed AES-256-GCM measurement run")]
struct Args {
    /// Decryptions per sampling phase
    #[arg(long, default_value_t = 20)]
    samples: usize,

    /// Boot settle delay in milliseconds
    #[arg(long, default_value_t = 3000)]
    settle_ms: u64,

    /// Idle gap between isolated samples in milliseconds
    #[arg(long, default_value_t = 500)]
    gap_ms: u64,

    /// Pause between the two phases in milliseconds
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,

    /// Emit the report as JSON instead of the terminal summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config {
        samples: args.samples,
        boot_settle: Duration::from_millis(args.settle_ms),
        sample_gap: Duration::from_millis(args.gap_ms),
        phase_pause: Duration::from_millis(args.pause_ms),
        ..Config::default()
    };

    let mut harness = match Harness::new(
        config,
        BUILTIN_VECTOR,
        NullTrigger,
        HostDelay,
        GcmDecryptor,
    ) {
        Ok(harness) => harness,
        Err(err) => {
            eprintln!("scopegate: {err}");
            return ExitCode::from(2);
        }
    };

    let report = harness.run();

    if args.json {
        match output::to_json_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("scopegate: failed to serialize report: {err}");
                return ExitCode::from(2);
            }
        }
    } else {
        print!("{}", output::format_report(&report));
    }

    // The process exit status is the run's final decryption status,
    // matching the firmware entry's return contract.
    ExitCode::from(report.status.clamp(0, 255) as u8)
}
