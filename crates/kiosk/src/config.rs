use {
    crate::*,
    lookup::LookupConfig,
    std::{path::PathBuf, str::FromStr, time::Duration},
    video::DEFAULT_PROBE_INDICES,
};

/// Settings for one kiosk session.
#[derive(Clone, Debug)]
pub struct KioskConfig {
    probe_indices: Vec<usize>,
    lookup: LookupConfig,
    jpeg_quality: u8,
    dismiss_after: Duration,
    repeat_interval: Duration,
    read_retry_delay: Duration,
    reconnect_after: u32,
    preview_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            probe_indices: DEFAULT_PROBE_INDICES.collect(),
            lookup: LookupConfig::default(),
            jpeg_quality: 80,
            dismiss_after: Duration::from_secs(4),
            repeat_interval: Duration::from_secs(4),
            read_retry_delay: Duration::from_millis(100),
            reconnect_after: 50,
            preview_path: None,
            log_dir: None,
        }
    }
}

impl KioskConfig {
    /// Camera indices to try, in order.
    pub fn with_probe_indices(mut self, probe_indices: Vec<usize>) -> Self {
        self.probe_indices = probe_indices;
        self
    }

    pub fn with_lookup(mut self, lookup: LookupConfig) -> Self {
        self.lookup = lookup;
        self
    }

    /// Preview JPEG quality, clamped to 1..=100.
    pub fn with_jpeg_quality(mut self, jpeg_quality: u8) -> Self {
        self.jpeg_quality = jpeg_quality.clamp(1, 100);
        self
    }

    /// How long a message stays on screen.
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    /// Minimum time before the same payload is looked up again. Zero disables.
    pub fn with_repeat_interval(mut self, repeat_interval: Duration) -> Self {
        self.repeat_interval = repeat_interval;
        self
    }

    pub fn with_read_retry_delay(mut self, read_retry_delay: Duration) -> Self {
        self.read_retry_delay = read_retry_delay;
        self
    }

    /// Consecutive read failures before the camera is reopened.
    pub fn with_reconnect_after(mut self, reconnect_after: u32) -> Self {
        self.reconnect_after = reconnect_after.max(1);
        self
    }

    pub fn with_preview_path(mut self, preview_path: Option<PathBuf>) -> Self {
        self.preview_path = preview_path;
        self
    }

    pub fn with_log_dir(mut self, log_dir: Option<PathBuf>) -> Self {
        self.log_dir = log_dir;
        self
    }

    // Getters
    pub fn probe_indices(&self) -> &[usize] {
        &self.probe_indices
    }

    pub fn lookup(&self) -> &LookupConfig {
        &self.lookup
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    pub fn repeat_interval(&self) -> Duration {
        self.repeat_interval
    }

    pub fn read_retry_delay(&self) -> Duration {
        self.read_retry_delay
    }

    pub fn reconnect_after(&self) -> u32 {
        self.reconnect_after
    }

    pub fn preview_path(&self) -> Option<&PathBuf> {
        self.preview_path.as_ref()
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.log_dir.as_ref()
    }

    /// Defaults overridden by `KIOSK_*` environment variables.
    pub fn from_env() -> Result<Self, KioskError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `var` returns for each `KIOSK_*` name.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, KioskError> {
        let mut config = Self::default();
        let mut lookup = config.lookup.clone();

        if let Some(value) = var("KIOSK_CAMERA_INDICES") {
            let indices = value
                .split(',')
                .map(|index| parse::<usize>("KIOSK_CAMERA_INDICES", index))
                .collect::<Result<Vec<_>, _>>()?;
            config = config.with_probe_indices(indices);
        }
        if config.probe_indices.is_empty() {
            return Err(KioskError::Config(
                "KIOSK_CAMERA_INDICES must list at least one index".to_string(),
            ));
        }
        if let Some(value) = var("KIOSK_API_URL") {
            lookup = lookup.with_base_url(value.trim());
        }
        if let Some(value) = var("KIOSK_API_TIMEOUT_MS") {
            let ms = parse::<u64>("KIOSK_API_TIMEOUT_MS", &value)?;
            lookup = lookup.with_timeout((ms > 0).then(|| Duration::from_millis(ms)));
        }
        if let Some(value) = var("KIOSK_JPEG_QUALITY") {
            let quality = parse::<u8>("KIOSK_JPEG_QUALITY", &value)?;
            if !(1..=100).contains(&quality) {
                return Err(KioskError::Config(format!(
                    "KIOSK_JPEG_QUALITY must be within 1..=100, got {}",
                    quality
                )));
            }
            config = config.with_jpeg_quality(quality);
        }
        if let Some(value) = var("KIOSK_DISMISS_MS") {
            let ms = parse::<u64>("KIOSK_DISMISS_MS", &value)?;
            config = config.with_dismiss_after(Duration::from_millis(ms));
        }
        if let Some(value) = var("KIOSK_REPEAT_MS") {
            let ms = parse::<u64>("KIOSK_REPEAT_MS", &value)?;
            config = config.with_repeat_interval(Duration::from_millis(ms));
        }
        if let Some(value) = var("KIOSK_PREVIEW_PATH") {
            config = config.with_preview_path(Some(PathBuf::from(value)));
        }
        if let Some(value) = var("KIOSK_LOG_DIR") {
            config = config.with_log_dir(Some(PathBuf::from(value)));
        }

        Ok(config.with_lookup(lookup))
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, KioskError> {
    value
        .trim()
        .parse()
        .map_err(|_| KioskError::Config(format!("{} has an invalid value: {:?}", name, value)))
}
