use {
    crate::{
        surface::{MessageBoard, SurfaceStats, highlight},
        *,
    },
    image::Image,
    minifb::{Key, Window, WindowOptions},
    std::time::Instant,
    tokio::sync::mpsc::{self, error::TryRecvError},
};

const TITLE: &str = "Kiosk - ESC to exit";
const INITIAL_WIDTH: usize = 640;
const INITIAL_HEIGHT: usize = 480;

/// Show the live preview in a desktop window.
///
/// While a message is up the preview gets a highlighted border and the
/// message text goes into the title bar.
///
/// Returns when the window is closed, Escape is pressed, or the worker
/// hangs up.
pub fn run(
    mut receiver: mpsc::Receiver<PresenterEvent>,
    config: &KioskConfig,
) -> Result<SurfaceStats, KioskError> {
    let mut window = Window::new(
        TITLE,
        INITIAL_WIDTH,
        INITIAL_HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|error| KioskError::Surface(error.to_string()))?;
    window.set_target_fps(30);

    let mut board = MessageBoard::new(config.dismiss_after());
    let mut stats = SurfaceStats::default();
    let mut buffer: Vec<u32> = vec![0; INITIAL_WIDTH * INITIAL_HEIGHT];
    let mut size = (INITIAL_WIDTH, INITIAL_HEIGHT);
    let mut title = String::new();
    let mut frame: Option<Image> = None;
    let mut fresh = false;
    let mut highlighted = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        loop {
            match receiver.try_recv() {
                Ok(PresenterEvent::Preview(jpeg)) => {
                    stats.previews += 1;
                    match image::decode_jpeg(&jpeg) {
                        Ok(decoded) => {
                            frame = Some(decoded);
                            fresh = true;
                        }
                        Err(error) => log::warn!("preview not shown: {}", error),
                    }
                }
                Ok(PresenterEvent::Message(text)) => {
                    stats.messages += 1;
                    log::info!("{}", text.replace('\n', " | "));
                    board.push(text);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::info!("worker hung up, closing window");
                    return Ok(stats);
                }
            }
        }

        let message = board.current(Instant::now()).map(|text| text.replace('\n', " | "));
        let wanted = match &message {
            Some(text) => format!("{} | {}", TITLE, text),
            None => TITLE.to_string(),
        };
        if wanted != title {
            window.set_title(&wanted);
            title = wanted;
        }

        // repaint on a new frame, or when the border has to appear or go
        if let Some(latest) = &frame {
            if fresh || highlighted != message.is_some() {
                fresh = false;
                highlighted = message.is_some();
                let mut shown = latest.clone();
                if highlighted {
                    if let Err(error) = highlight(&mut shown) {
                        log::warn!("highlight not drawn: {}", error);
                    }
                }
                match image::image_to_u32(&shown) {
                    Ok(packed) => {
                        buffer = packed;
                        size = (shown.size.x, shown.size.y);
                    }
                    Err(error) => log::warn!("preview not shown: {}", error),
                }
            }
        }

        window
            .update_with_buffer(&buffer, size.0, size.1)
            .map_err(|error| KioskError::Surface(error.to_string()))?;
    }

    log::info!("window closed");
    Ok(stats)
}
