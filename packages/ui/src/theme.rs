use dioxus::prelude::*;

// Hand-maintained utility subset; see the header of the file.
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn SiteTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: TAILWIND_CSS } }
}
