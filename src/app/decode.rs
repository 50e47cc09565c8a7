// Background image decoding. The file is read and decoded on a one-shot
// worker thread; the result comes back over a channel the frame loop drains,
// followed by a repaint request so it is picked up promptly.

use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

use crate::sampler::BrightnessMap;

/// Messages delivered from decode workers to the frame loop.
pub enum ImageMsg {
    Decoded { name: String, map: BrightnessMap },
    Failed { name: String, error: DecodeError },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

pub fn spawn_decode(path: PathBuf, tx: mpsc::Sender<ImageMsg>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let msg = match decode(&path) {
            Ok(map) => ImageMsg::Decoded { name, map },
            Err(error) => ImageMsg::Failed { name, error },
        };
        let _ = tx.send(msg);
        ctx.request_repaint();
    });
}

fn decode(path: &Path) -> Result<BrightnessMap, DecodeError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    Ok(BrightnessMap::from_image(&img))
}
