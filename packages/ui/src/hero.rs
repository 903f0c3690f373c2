use dioxus::prelude::*;

pub const HERO_IMAGE: Asset = asset!("/assets/Champion-of-the-week.png");

/// Anchor target of the hero container, so `/#home` scrolls to it.
pub const HERO_ANCHOR: &str = "home";

pub const HERO_ALT: &str = "Hero Image";

/// Full viewport height, centered on both axes, dark fill, fixed padding.
pub const HERO_SECTION_CLASSES: &[&str] = &[
    "relative",
    "min-h-screen",
    "flex",
    "items-center",
    "justify-center",
    "bg-black",
    "p-8",
];

/// Fill the container and crop to cover instead of stretching.
pub const HERO_IMAGE_CLASSES: &[&str] = &["w-full", "h-full", "object-cover"];

/// Resolved reference of the hero image as emitted in `src`.
pub fn hero_image_src() -> String {
    HERO_IMAGE.to_string()
}

/// Join utility tokens into a `class` attribute value.
pub fn class_list(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section {
            id: HERO_ANCHOR,
            class: class_list(HERO_SECTION_CLASSES),
            img {
                src: hero_image_src(),
                alt: HERO_ALT,
                class: class_list(HERO_IMAGE_CLASSES),
            }
        }
    }
}
