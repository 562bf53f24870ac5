use anyhow::Result;
use eagle::{Camera, FocalScene, Palette, Trackbars, TRACKBAR_WINDOW};
use log::{error, info};
use opencv::highgui;

const CAMERA_INDEX: i32 = 0;
const OUTPUT_WINDOW: &str = "Output";
const FIRST_COLOR: &str = "green";
const SECOND_COLOR: &str = "violet";

const KEY_ESC: i32 = 27;
const KEY_Q: i32 = b'q' as i32;

fn run() -> Result<()> {
    let trackbars = Trackbars::create(TRACKBAR_WINDOW)?;
    let scene = FocalScene::from_palette(&Palette::default(), FIRST_COLOR, SECOND_COLOR)?;

    let mut camera = Camera::open(CAMERA_INDEX)?;
    while let Some(frame) = camera.next_frame()? {
        let report = scene.process(&frame, trackbars.read()?)?;
        highgui::imshow(OUTPUT_WINDOW, &report.output)?;

        let key = highgui::wait_key(1)? & 0xff;
        if key == KEY_Q || key == KEY_ESC {
            info!("quit requested");
            return Ok(());
        }
    }
    info!("camera stream ended");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}
