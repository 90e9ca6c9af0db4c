//! Background work: preview reads and endpoint submissions.
//!
//! Each operation runs on its own short-lived thread and reports back with a
//! single message carrying the generation it was spawned for; the state
//! machine decides whether the completion is still current.

use eframe::egui;
use flower_core::{PredictClient, PredictError, Prediction, Preview};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

pub enum WorkerMsg {
    Preview {
        generation: u64,
        preview: Preview,
        pixels: Option<egui::ColorImage>,
    },
    Finished {
        generation: u64,
        selection: u64,
        outcome: Result<Prediction, PredictError>,
    },
}

/// Reads the selected file in full and decodes it for display. Single-shot,
/// no cancellation; a failed read only logs.
pub fn load_preview(
    tx: Sender<WorkerMsg>,
    ctx: egui::Context,
    generation: u64,
    path: PathBuf,
    mime: &'static str,
) {
    thread::spawn(move || match flower_core::load_preview(&path, mime) {
        Ok(preview) => {
            let pixels = decode_pixels(&preview.bytes);
            if tx
                .send(WorkerMsg::Preview {
                    generation,
                    preview,
                    pixels,
                })
                .is_ok()
            {
                ctx.request_repaint();
            }
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "preview read failed");
        }
    });
}

/// Uploads the selected file to the prediction endpoint. Exactly one finish
/// message is sent, whichever branch was taken.
pub fn submit(
    client: Arc<PredictClient>,
    tx: Sender<WorkerMsg>,
    ctx: egui::Context,
    generation: u64,
    selection: u64,
    path: PathBuf,
    mime: &'static str,
) {
    thread::spawn(move || {
        let outcome = read_and_predict(&client, &path, mime);
        if tx
            .send(WorkerMsg::Finished {
                generation,
                selection,
                outcome,
            })
            .is_ok()
        {
            ctx.request_repaint();
        }
    });
}

fn read_and_predict(
    client: &PredictClient,
    path: &Path,
    mime: &'static str,
) -> Result<Prediction, PredictError> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    client.predict(bytes, filename, mime)
}

fn decode_pixels(bytes: &[u8]) -> Option<egui::ColorImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
        }
        Err(error) => {
            tracing::warn!(%error, "preview decode failed, showing placeholder");
            None
        }
    }
}
