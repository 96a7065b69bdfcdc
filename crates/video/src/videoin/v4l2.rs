use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

/// Desired capture settings; `None` keeps whatever the driver reports.
#[derive(Debug, Clone)]
pub struct V4l2Config {
    pub size: Option<Vec2<usize>>,
    pub format: Option<PixelFormat>,
    pub frame_rate: Option<f32>,
    pub buffer_count: u32,
}

impl Default for V4l2Config {
    fn default() -> Self {
        Self {
            size: None,
            format: None,
            frame_rate: None,
            buffer_count: 4,
        }
    }
}

pub struct V4l2 {
    desired: V4l2Config,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2 {
    pub fn new(desired: V4l2Config) -> Self {
        Self {
            desired,
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }
}

// the driver hands us YUYV or MJPEG; everything else is converted later
fn fourcc_for(format: PixelFormat) -> Result<FourCC, VideoError> {
    match format {
        PixelFormat::Yuyv | PixelFormat::Jpeg => Ok(FourCC::new(&format.as_fourcc().to_le_bytes())),
        other => Err(VideoError::Device(format!(
            "{:?} is not a capture format",
            other
        ))),
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, index: usize) -> Result<VideoInConfig, VideoError> {
        self.stream.take();

        let device = Device::new(index)?;
        let device_format = Capture::format(&device)?;

        let desired_size = self.desired.size.unwrap_or(Vec2::new(
            device_format.width as usize,
            device_format.height as usize,
        ));
        let desired_fourcc = match self.desired.format {
            Some(format) => fourcc_for(format)?,
            None => device_format.fourcc,
        };

        // the driver may adjust what we ask for, so read back what it applied
        let actual_format = Capture::set_format(
            &device,
            &Format::new(desired_size.x as u32, desired_size.y as u32, desired_fourcc),
        )?;
        self.size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        let fourcc = u32::from_le_bytes(actual_format.fourcc.repr);
        self.format = match PixelFormat::from_fourcc(fourcc) {
            Some(format @ (PixelFormat::Yuyv | PixelFormat::Jpeg)) => format,
            _ => {
                return Err(VideoError::Device(format!(
                    "unsupported pixel format: {}",
                    image::fourcc_to_string(fourcc)
                )));
            }
        };

        let desired_frame_rate = match self.desired.frame_rate {
            Some(frame_rate) => frame_rate,
            None => {
                let params = Capture::params(&device)?;
                params.interval.denominator as f32 / params.interval.numerator as f32
            }
        };
        let actual_params = Capture::set_params(
            &device,
            &v4l::video::capture::Parameters::with_fps(desired_frame_rate as u32),
        )?;
        let frame_rate =
            actual_params.interval.denominator as f32 / actual_params.interval.numerator as f32;

        let stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, self.desired.buffer_count)
                .map_err(|error| VideoError::Device(error.to_string()))?;
        self.stream = Some(stream);

        Ok(VideoInConfig {
            index,
            size: self.size,
            format: self.format,
            frame_rate,
        })
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Read("device is not open".to_string()))?;
        let (data, _metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Read(error.to_string()))?;
        let data = match self.format {
            // MJPEG buffers are padded; the decoder stops at the EOI marker
            PixelFormat::Jpeg => data.to_vec(),
            _ => data[..(self.size.area() * 2).min(data.len())].to_vec(),
        };
        Ok(Image::new(self.size, data, self.format))
    }
}
