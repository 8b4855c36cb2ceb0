use clap::Parser;
use last_bootup_time::locator::config::{DEFAULT_BUFFER_SIZE, DEFAULT_SOURCE_NAME};
use last_bootup_time::source::DumpSource;
use last_bootup_time::{BootTime, BootTimeError, BootTimeLocator, MatchCriteria, ScanConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "last-boot", version, about = "Print the last boot time recorded in the event log")]
struct Args {
    /// Read records from a raw record dump instead of the system log.
    /// Records before a corrupt trailer are unreadable, so a damaged dump
    /// reports "not found"
    #[arg(long, value_name = "FILE")]
    dump: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_SOURCE_NAME)]
    source: String,

    #[arg(long, default_value = MatchCriteria::BOOT_PROVIDER)]
    provider: String,

    #[arg(long, default_value_t = MatchCriteria::BOOT_EVENT_ID)]
    event_id: u16,

    /// Initial read buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Print an RFC 3339 date instead of seconds since the epoch
    #[arg(long)]
    rfc3339: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(boot_time) => {
            if args.rfc3339 {
                println!("{}", boot_time.to_datetime().to_rfc3339());
            } else {
                println!("{}", boot_time);
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_not_found() => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<BootTime, BootTimeError> {
    let config = ScanConfig::default()
        .with_source_name(args.source.as_str())
        .with_criteria(MatchCriteria::new(args.provider.as_str(), args.event_id))
        .with_initial_buffer_size(args.buffer_size);
    let locator = BootTimeLocator::new(config);

    let found = match &args.dump {
        Some(path) => {
            let source = DumpSource::open(path).map_err(|cause| BootTimeError::SourceUnavailable {
                log: path.display().to_string(),
                cause,
            })?;
            locator.locate_in(source)?
        }
        None => locator.locate()?,
    };

    found.ok_or_else(|| locator.not_found())
}
