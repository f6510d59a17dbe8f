use std::io;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eternal_quest::config::CONFIG_FILE;
use eternal_quest::{Console, QuestConfig};

fn main() -> io::Result<()> {
    let (config, config_error) = match QuestConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(e) => (QuestConfig::default(), Some(e)),
    };

    // Initialize logging (stderr keeps it out of the menu)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("Ignoring {}: {}", CONFIG_FILE, e);
    }
    info!("Using save file {:?}", config.save_file);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.save_file.clone());

    if config.load_on_start {
        console.load_progress()?;
    }

    console.run()
}
