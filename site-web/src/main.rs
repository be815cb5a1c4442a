use site_web::App;
use tracing::Level;

fn configure_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logging: {e}");
    }
}

fn main() {
    configure_logging();
    dioxus::launch(App);
}
