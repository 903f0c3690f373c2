use dioxus::prelude::*;
use ui::HeroSection;

#[component]
pub fn Home() -> Element {
    rsx! {
        HeroSection {}
    }
}
