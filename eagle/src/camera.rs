use anyhow::{bail, Context, Result};
use log::{info, warn};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCaptureTrait, VideoCaptureTraitConst},
};

/// Exclusively owned capture device, released on drop.
pub struct Camera {
    cam: videoio::VideoCapture,
    device_id: i32,
}

impl Camera {
    pub fn open(device_id: i32) -> Result<Self> {
        let cam = videoio::VideoCapture::new(device_id, videoio::CAP_ANY)
            .with_context(|| format!("opening camera {device_id}"))?;
        if !cam.is_opened()? {
            bail!("camera {device_id} did not open");
        }
        info!("opened camera {device_id}");
        Ok(Camera { cam, device_id })
    }

    /// Next frame, or `None` once the stream has ended.
    pub fn next_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.cam.read(&mut frame)? || frame.size()?.width == 0 {
            return Ok(None);
        }
        Ok(Some(frame))
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        if let Err(e) = self.cam.release() {
            warn!("releasing camera {}: {e}", self.device_id);
        } else {
            info!("released camera {}", self.device_id);
        }
    }
}
