use dioxus::prelude::*;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}

        Router::<Route> {}
    }
}

/// Desktop page shell; the webview has no address bar, so there is no
/// not-found route to reach.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        main { id: "main", Outlet::<Route> {} }
    }
}
