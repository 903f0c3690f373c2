use dioxus::prelude::*;

use config::SiteConfig;
use views::{Home, PageNotFound};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    // Initialize tracing for server logs
    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let (config, errors) = SiteConfig::from_env();
    for err in &errors {
        tracing::warn!("startup: {err:#}; using the default for it");
    }
    tracing::info!("startup: listening on {}", config.socket_addr());
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        Router::<Route> {}
    }
}

/// Page shell for the web `Route` enum. The hero fills the viewport, so
/// the layout adds nothing around the outlet.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        main { id: "main", Outlet::<Route> {} }
    }
}
