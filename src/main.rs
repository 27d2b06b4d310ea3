// Playlist Scheduler
// Main entry point: replays a recorded editing session and prints the payload

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use playlist_scheduler::scheduler::script::{self, SessionFile};
use playlist_scheduler::services::settings::SettingsService;
use playlist_scheduler::SchedulerSession;

const USAGE: &str = "usage: playlist-scheduler <session.json> [--config <settings.toml>]";

struct Args {
    session: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut session = None;
    let mut config = None;
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ if session.is_none() => session = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {}\n{}", arg, USAGE),
        }
    }

    let session = session.with_context(|| USAGE.to_string())?;
    Ok(Args { session, config })
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args()?;
    let settings_service = match args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::for_user(),
    };
    let settings = settings_service.get()?;
    log::info!(
        "Starting Playlist Scheduler ({} - {} every {} min)",
        settings.grid.start,
        settings.grid.end,
        settings.grid.interval_minutes
    );

    let file = SessionFile::load(&args.session)?;
    let mut session = SchedulerSession::from_settings(&settings, &file.media, &file.schedules)
        .context("failed to build the scheduling grid")?;
    script::run(&mut session, &file.script)?;

    let payload = session
        .build_payload(&file.form())
        .context("playlist cannot be submitted")?;
    log::info!("Scheduled {} of {} media items", payload.schedules.len(), session.store().len());

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
