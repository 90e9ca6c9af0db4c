use eframe::NativeOptions;

mod app;
mod worker;

use app::UiApp;

fn main() {
    tracing_subscriber::fmt::init();
    let options = NativeOptions::default();
    if let Err(e) = eframe::run_native(
        "Flower Classifier",
        options,
        Box::new(|cc| Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(cc)))),
    ) {
        eprintln!("Application stopped with error: {e}");
    }
}
