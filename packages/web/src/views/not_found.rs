use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "page not found");
    let home = format!("/#{}", ui::HERO_ANCHOR);

    rsx! {
        div { class: "min-h-screen flex flex-col gap-4 items-center justify-center bg-black p-8 text-white",
            h1 { "Page not found" }
            a { class: "underline", href: home, "Back to home" }
        }
    }
}
