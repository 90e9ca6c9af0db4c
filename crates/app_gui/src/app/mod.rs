//! Main application state and frame loop.

mod result_panel;

use eframe::{App, Frame, egui};
use flower_core::state::{Command, Event, PageState};
use flower_core::{ApiConfig, PredictClient, mime_for_path};
use rfd::FileDialog;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::worker::{self, WorkerMsg};

pub struct UiApp {
    state: PageState,
    client: Arc<PredictClient>,
    tx: Sender<WorkerMsg>,
    rx: Receiver<WorkerMsg>,
    preview_tex: Option<egui::TextureHandle>,
}

impl UiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ApiConfig::from_env_or(env!("FLOWER_API_URL_DEFAULT"));
        tracing::info!(base_url = %config.base_url, "prediction endpoint configured");
        let (tx, rx) = channel();
        Self {
            state: PageState::default(),
            client: Arc::new(PredictClient::new(config)),
            tx,
            rx,
            preview_tex: None,
        }
    }

    fn run_command(&self, ctx: &egui::Context, command: Command) {
        match command {
            Command::LoadPreview {
                generation,
                path,
                mime,
            } => worker::load_preview(self.tx.clone(), ctx.clone(), generation, path, mime),
            Command::Submit {
                generation,
                selection,
                path,
                mime,
            } => worker::submit(
                self.client.clone(),
                self.tx.clone(),
                ctx.clone(),
                generation,
                selection,
                path,
                mime,
            ),
        }
    }

    fn drain_worker_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                WorkerMsg::Preview {
                    generation,
                    preview,
                    pixels,
                } => {
                    let fresh = generation == self.state.selection_generation();
                    self.state
                        .apply(Event::PreviewLoaded {
                            generation,
                            preview,
                        });
                    if fresh {
                        self.preview_tex = pixels.map(|color| {
                            ctx.load_texture(
                                format!("preview:{generation}"),
                                color,
                                egui::TextureOptions::LINEAR,
                            )
                        });
                    }
                }
                WorkerMsg::Finished {
                    generation,
                    selection,
                    outcome,
                } => {
                    self.state.apply(Event::SubmitFinished {
                        generation,
                        selection,
                        outcome,
                    });
                }
            }
        }
    }

    fn pick_image(&mut self, ctx: &egui::Context) {
        let Some(path) = FileDialog::new()
            .add_filter(
                "Images",
                &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"],
            )
            .set_directory(".")
            .pick_file()
        else {
            return;
        };

        let mime = mime_for_path(&path);
        if let Some(cmd) = self.state.apply(Event::FileChosen { path, mime }) {
            self.run_command(ctx, cmd);
        }
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        if self.state.preview().is_none() {
            return;
        }
        ui.add_space(6.0);
        if let Some(tex) = &self.preview_tex {
            ui.add(egui::Image::new(&*tex).max_width(420.0).max_height(320.0));
        } else {
            // Bytes were read but not decodable; keep the layout stable.
            let (resp, painter) =
                ui.allocate_painter(egui::Vec2::new(420.0, 240.0), egui::Sense::hover());
            let r = resp.rect;
            painter.rect_filled(r, 4.0, egui::Color32::from_gray(40));
            painter.rect_stroke(
                r,
                4.0,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                egui::StrokeKind::Inside,
            );
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.drain_worker_messages(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Flower Classifier");
            ui.label("Upload an image to identify the type of flower.");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label("ℹ");
                        ui.label("Model can classify: daisy, dandelion, rose, sunflower, and tulip.");
                    });
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Select Image…").clicked() {
                            self.pick_image(ctx);
                        }
                        if let Some(selection) = self.state.selection()
                            && let Some(name) = selection.path.file_name()
                        {
                            ui.label(name.to_string_lossy().into_owned());
                        }
                    });

                    self.render_preview(ui);

                    if let Some(error) = self.state.error() {
                        ui.add_space(6.0);
                        ui.colored_label(egui::Color32::from_rgb(201, 42, 42), error);
                    }

                    ui.add_space(8.0);
                    let submit_label = if self.state.in_flight() {
                        "Processing..."
                    } else {
                        "Classify Flower"
                    };
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(self.state.can_submit(), egui::Button::new(submit_label))
                            .clicked()
                            && let Some(cmd) = self.state.apply(Event::SubmitRequested)
                        {
                            self.run_command(ctx, cmd);
                        }
                        if self.state.in_flight() {
                            ui.add(egui::Spinner::new());
                        }
                    });

                    if let Some(prediction) = self.state.prediction().cloned() {
                        ui.add_space(12.0);
                        self.render_result_panel(ui, &prediction);
                    }
                });
        });
    }
}
