use {
    anyhow::Context,
    kiosk::{KioskConfig, ScanWorker, surface},
    lookup::HttpLookup,
    scan::QrScanner,
};

fn main() -> anyhow::Result<()> {
    let config = KioskConfig::from_env()?;

    match config.log_dir() {
        Some(dir) => base::init_file_logger(dir)
            .with_context(|| format!("cannot log to {}", dir.display()))?,
        None => base::init_stdout_logger(),
    }
    log::info!("lookup endpoint: {}", config.lookup().endpoint());

    let lookup = HttpLookup::new(config.lookup().clone())?;
    let device = video::default_device()?;
    let (presenter, receiver) = kiosk::channel();

    let worker = ScanWorker::spawn(device, config.clone(), QrScanner::new(), lookup, presenter)
        .context("scan worker did not start")?;
    log::info!("scanning on camera {}", worker.index());

    #[cfg(feature = "window")]
    let stats = surface::window::run(receiver, &config)?;
    #[cfg(not(feature = "window"))]
    let stats = surface::headless::run(receiver, &config)?;

    log::info!(
        "surface closed after {} previews and {} messages",
        stats.previews,
        stats.messages
    );
    worker.stop()?;
    Ok(())
}
