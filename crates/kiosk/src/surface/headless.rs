use {
    crate::{surface::SurfaceStats, *},
    std::{fs, path::Path},
    tokio::sync::mpsc,
};

/// Drain events until the worker hangs up.
///
/// Messages go to the log. If the config names a preview path, every
/// preview is written there, replacing the previous one. A preview that
/// cannot be written is logged and skipped; scanning goes on.
pub fn run(
    mut receiver: mpsc::Receiver<PresenterEvent>,
    config: &KioskConfig,
) -> Result<SurfaceStats, KioskError> {
    let mut stats = SurfaceStats::default();
    while let Some(event) = receiver.blocking_recv() {
        match event {
            PresenterEvent::Preview(jpeg) => {
                stats.previews += 1;
                if let Some(path) = config.preview_path() {
                    if let Err(error) = write_preview(path, &jpeg) {
                        log::warn!("preview not written to {}: {}", path.display(), error);
                    }
                }
            }
            PresenterEvent::Message(text) => {
                stats.messages += 1;
                log::info!("{}", text.replace('\n', " | "));
            }
        }
    }
    log::info!(
        "headless surface done: {} previews, {} messages",
        stats.previews,
        stats.messages
    );
    Ok(stats)
}

// write then rename, so a reader never sees half a JPEG
fn write_preview(path: &Path, jpeg: &[u8]) -> Result<(), KioskError> {
    let partial = path.with_extension("partial");
    fs::write(&partial, jpeg)?;
    fs::rename(&partial, path)?;
    Ok(())
}
