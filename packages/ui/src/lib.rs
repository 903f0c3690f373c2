//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::{
    class_list, hero_image_src, HeroSection, HERO_ALT, HERO_ANCHOR, HERO_IMAGE,
    HERO_IMAGE_CLASSES, HERO_SECTION_CLASSES,
};

mod theme;
pub use theme::SiteTheme;
