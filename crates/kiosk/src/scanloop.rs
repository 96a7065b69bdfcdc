use {
    crate::*,
    lookup::Lookup,
    scan::{Scanner, annotate},
    std::{
        collections::HashMap,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        thread::JoinHandle,
        time::Instant,
    },
    tokio::sync::oneshot,
    video::{VideoError, VideoIn, VideoInDevice},
};

/// What one iteration of the scan loop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A frame was captured and its preview forwarded.
    Frame {
        sequence: u64,
        /// Payloads found in the frame, in scanner order.
        codes: Vec<String>,
        /// Payloads that were looked up (not suppressed as repeats).
        resolved: Vec<String>,
    },
    /// Capture failed; nothing was forwarded.
    ReadFailed,
}

/// Capture, scan, resolve and preview, one frame per `step`.
pub struct ScanLoop<S, L, P> {
    videoin: VideoIn,
    scanner: S,
    lookup: L,
    presenter: P,
    config: KioskConfig,
    recent: HashMap<String, Instant>,
    read_failures: u32,
}

impl<S: Scanner, L: Lookup, P: Presenter> ScanLoop<S, L, P> {
    pub fn new(videoin: VideoIn, scanner: S, lookup: L, presenter: P, config: KioskConfig) -> Self {
        Self {
            videoin,
            scanner,
            lookup,
            presenter,
            config,
            recent: HashMap::new(),
            read_failures: 0,
        }
    }

    /// Run one iteration.
    ///
    /// Only a closed presenter is an error; read failures and lookup
    /// failures are part of normal operation.
    pub fn step(&mut self) -> Result<Step, KioskError> {
        let frame = match self.videoin.capture() {
            Ok(frame) => {
                self.read_failures = 0;
                frame
            }
            Err(error) => {
                self.read_failed(error);
                return Ok(Step::ReadFailed);
            }
        };

        let codes = self.scanner.scan(&frame.color);

        let repeat_interval = self.config.repeat_interval();
        let now = Instant::now();
        self.recent
            .retain(|_, seen| now.duration_since(*seen) < repeat_interval);

        let mut resolved = Vec::new();
        for code in &codes {
            if !repeat_interval.is_zero() && self.recent.contains_key(&code.payload) {
                log::debug!("skipping repeated code {:?}", code.payload);
                continue;
            }
            let result = self.lookup.resolve(&code.payload);
            self.presenter.show_message(result.message(&code.payload))?;
            if !repeat_interval.is_zero() {
                self.recent.insert(code.payload.clone(), Instant::now());
            }
            resolved.push(code.payload.clone());
        }

        match annotate(&frame.color, &codes)
            .and_then(|annotated| image::encode_jpeg(&annotated, self.config.jpeg_quality()))
        {
            Ok(jpeg) => self.presenter.update_preview(jpeg)?,
            Err(error) => log::warn!("frame {}: preview not encoded: {}", frame.sequence, error),
        }

        Ok(Step::Frame {
            sequence: frame.sequence,
            codes: codes.into_iter().map(|code| code.payload).collect(),
            resolved,
        })
    }

    fn read_failed(&mut self, error: VideoError) {
        self.read_failures += 1;
        log::warn!(
            "camera {}: read failed ({} in a row): {}",
            self.videoin.index(),
            self.read_failures,
            error
        );
        if self.read_failures >= self.config.reconnect_after() {
            self.read_failures = 0;
            if let Err(error) = self.videoin.reopen() {
                log::error!("camera {}: reopen failed: {}", self.videoin.index(), error);
            }
        }
        std::thread::sleep(self.config.read_retry_delay());
    }

    /// Step until `stop` is raised or the presenter goes away.
    ///
    /// The camera is released when this returns.
    pub fn run(mut self, stop: &AtomicBool) -> Result<(), KioskError> {
        log::info!("scan loop running on camera {}", self.videoin.index());
        while !stop.load(Ordering::Relaxed) {
            if let Err(error) = self.step() {
                log::info!("scan loop stopped: {}", error);
                return Err(error);
            }
        }
        log::info!("scan loop stopped");
        Ok(())
    }
}

/// A `ScanLoop` running on its own thread.
pub struct ScanWorker {
    stop: Arc<AtomicBool>,
    index: usize,
    join_handle: Option<JoinHandle<Result<(), KioskError>>>,
}

impl ScanWorker {
    /// Start the worker thread and wait until it has bound a camera.
    ///
    /// The camera is probed on the worker thread, since capture must happen
    /// on the thread that opened the device. If no index opens, the
    /// `NoDeviceAvailable` error is returned here and nothing is captured.
    pub fn spawn<S, L, P>(
        device: Box<dyn VideoInDevice>,
        config: KioskConfig,
        scanner: S,
        lookup: L,
        presenter: P,
    ) -> Result<Self, KioskError>
    where
        S: Scanner + 'static,
        L: Lookup + 'static,
        P: Presenter + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let (init_tx, init_rx) = oneshot::channel::<Result<usize, VideoError>>();

        let join_handle = std::thread::Builder::new()
            .name("scan-worker".to_string())
            .spawn({
                let stop = Arc::clone(&stop);
                move || {
                    let videoin = match VideoIn::probe(device, config.probe_indices().to_vec()) {
                        Ok(videoin) => {
                            let _ = init_tx.send(Ok(videoin.index()));
                            videoin
                        }
                        Err(error) => {
                            let _ = init_tx.send(Err(error));
                            return Ok(());
                        }
                    };
                    ScanLoop::new(videoin, scanner, lookup, presenter, config).run(&stop)
                }
            })?;

        let index = match init_rx.blocking_recv() {
            Ok(Ok(index)) => index,
            Ok(Err(error)) => {
                let _ = join_handle.join();
                return Err(error.into());
            }
            Err(_) => {
                let _ = join_handle.join();
                return Err(KioskError::Worker(
                    "worker thread died during init".to_string(),
                ));
            }
        };

        Ok(Self {
            stop,
            index,
            join_handle: Some(join_handle),
        })
    }

    /// Index of the bound camera.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the loop is still going.
    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Raise the stop flag and wait for the worker, which releases the camera.
    ///
    /// A loop that ended because the presenter closed is not an error here.
    pub fn stop(mut self) -> Result<(), KioskError> {
        self.stop.store(true, Ordering::Relaxed);
        let Some(handle) = self.join_handle.take() else {
            return Ok(());
        };
        match handle.join() {
            Ok(Ok(())) | Ok(Err(KioskError::PresenterClosed)) => Ok(()),
            Ok(Err(error)) => Err(error),
            Err(_) => Err(KioskError::Worker("worker thread panicked".to_string())),
        }
    }
}

impl Drop for ScanWorker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
