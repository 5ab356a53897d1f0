mod client;
mod model;

#[cfg(feature = "server")]
mod server;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    use dioxus_logger::tracing::{self, Level};

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();

    if let Err(e) = server::launch(|name| std::env::var(name).ok()).await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(client::App);
}
