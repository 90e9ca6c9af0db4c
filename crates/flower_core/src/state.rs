//! Page state machine.
//!
//! All transient UI state lives in one record with mutually-constrained
//! slots, updated only through [`PageState::apply`]. The reducer performs no
//! I/O; it hands [`Command`]s back to the caller, which runs them on worker
//! threads and feeds completions back in as events. Async completions carry
//! the generation they were spawned for, and stale ones are dropped.

use crate::media::{Preview, is_image_mime};
use crate::{PredictError, Prediction};
use std::path::PathBuf;

/// Shown when the picked file's declared content type is not an image type.
pub const VALIDATION_ERROR: &str = "Please select an image file";
/// Shown when a submission is requested with nothing selected.
pub const NO_FILE_ERROR: &str = "Please select an image first";
/// The one generic message for any transport, status, or body failure. The
/// cause is logged, never shown.
pub const SUBMIT_ERROR: &str = "Failed to process image. Please try again.";

/// The user's current, validated selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: PathBuf,
    pub mime: &'static str,
}

/// Outcome slot of the last submission attempt. At most one of error/result
/// is ever present.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    None,
    Error(String),
    Prediction(Prediction),
}

/// Everything that can happen to the page.
#[derive(Debug)]
pub enum Event {
    /// The user picked a file; `mime` is its declared content type, absent
    /// when the extension is unknown.
    FileChosen {
        path: PathBuf,
        mime: Option<&'static str>,
    },
    /// A preview read finished for the given selection generation.
    PreviewLoaded { generation: u64, preview: Preview },
    /// The user hit the classify trigger.
    SubmitRequested,
    /// A submission finished. `generation` is the submission it belongs to,
    /// `selection` the selection generation it was spawned for.
    SubmitFinished {
        generation: u64,
        selection: u64,
        outcome: Result<Prediction, PredictError>,
    },
}

/// Side effects the caller must run after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadPreview {
        generation: u64,
        path: PathBuf,
        mime: &'static str,
    },
    Submit {
        generation: u64,
        selection: u64,
        path: PathBuf,
        mime: &'static str,
    },
}

#[derive(Debug, Default)]
pub struct PageState {
    selection: Option<Selection>,
    preview: Option<Preview>,
    in_flight: bool,
    outcome: Outcome,
    selection_gen: u64,
    submit_gen: u64,
}

impl PageState {
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.outcome {
            Outcome::Prediction(prediction) => Some(prediction),
            _ => None,
        }
    }

    /// Whether the classify trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.in_flight
    }

    /// Current selection generation; preview completions for older
    /// generations are stale.
    pub fn selection_generation(&self) -> u64 {
        self.selection_gen
    }

    /// Applies one event and returns the side effect to run, if any.
    pub fn apply(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::FileChosen { path, mime } => {
                // Any selection attempt supersedes the previous outcome.
                self.outcome = Outcome::None;
                match mime.filter(|m| is_image_mime(m)) {
                    Some(mime) => {
                        self.selection_gen += 1;
                        self.selection = Some(Selection {
                            path: path.clone(),
                            mime,
                        });
                        Some(Command::LoadPreview {
                            generation: self.selection_gen,
                            path,
                            mime,
                        })
                    }
                    None => {
                        // Previous file and preview stay untouched.
                        self.outcome = Outcome::Error(VALIDATION_ERROR.to_string());
                        None
                    }
                }
            }
            Event::PreviewLoaded {
                generation,
                preview,
            } => {
                if generation == self.selection_gen && self.selection.is_some() {
                    self.preview = Some(preview);
                } else {
                    tracing::debug!(generation, current = self.selection_gen, "dropping stale preview");
                }
                None
            }
            Event::SubmitRequested => {
                if self.in_flight {
                    return None;
                }
                let Some(selection) = &self.selection else {
                    self.outcome = Outcome::Error(NO_FILE_ERROR.to_string());
                    return None;
                };
                self.outcome = Outcome::None;
                self.in_flight = true;
                self.submit_gen += 1;
                Some(Command::Submit {
                    generation: self.submit_gen,
                    selection: self.selection_gen,
                    path: selection.path.clone(),
                    mime: selection.mime,
                })
            }
            Event::SubmitFinished {
                generation,
                selection,
                outcome,
            } => {
                if generation != self.submit_gen {
                    tracing::debug!(generation, current = self.submit_gen, "dropping stale submission");
                    return None;
                }
                // Exactly one finish event per submission reaches this point,
                // whatever branch the worker took.
                self.in_flight = false;
                if selection != self.selection_gen {
                    tracing::debug!(
                        selection,
                        current = self.selection_gen,
                        "dropping result for superseded selection"
                    );
                    return None;
                }
                match outcome {
                    Ok(prediction) => self.outcome = Outcome::Prediction(prediction),
                    Err(error) => {
                        tracing::error!(%error, "classification request failed");
                        self.outcome = Outcome::Error(SUBMIT_ERROR.to_string());
                    }
                }
                None
            }
        }
    }
}
