//! Inline SVG icons (Feather-style strokes on a 24x24 grid).

use leptos::prelude::*;

use crate::config::FeatureIcon;

/// Renders stroked SVG markup.
///
/// `shapes` is the inner markup of the `<svg>` element.
#[component]
pub fn Icon(
    shapes: &'static str,
    #[prop(default = "48")] size: &'static str,
    #[prop(default = "2")] stroke_width: &'static str,
    #[prop(default = "text-blue-500 mb-4")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            inner_html=shapes
        ></svg>
    }
}

/// Icon for a feature card.
#[component]
pub fn FeatureGlyph(icon: FeatureIcon) -> impl IntoView {
    match icon {
        FeatureIcon::Rust => view! { <Icon shapes=ICON_RUST stroke_width="1.5" /> }.into_any(),
        FeatureIcon::Code => view! { <Icon shapes=ICON_CODE /> }.into_any(),
        FeatureIcon::Link => view! { <Icon shapes=ICON_LINK /> }.into_any(),
        FeatureIcon::Table => view! { <Icon shapes=ICON_TABLE /> }.into_any(),
    }
}

/// Package box, used as the product mark
pub const ICON_BOX: &str = r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path><polyline points="3.27 6.96 12 12.01 20.73 6.96"></polyline><line x1="12" y1="22.08" x2="12" y2="12"></line>"#;

/// Gear-ish hexagon
pub const ICON_RUST: &str = r#"<path d="M12 2L2 7l1.5 9L12 22l8.5-4L22 7zM12 2v20M2 7h20M12 2L5.5 4.5M12 2l6.5 2.5M12 22L5.5 19.5M12 22l6.5-2.5M2 7l3.5 12.5M22 7l-3.5 12.5"></path><circle cx="12" cy="12" r="1.5"></circle>"#;

pub const ICON_CODE: &str = r#"<polyline points="16 18 22 12 16 6"></polyline><polyline points="8 6 2 12 8 18"></polyline>"#;

pub const ICON_LINK: &str = r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.72"></path><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.72-1.72"></path>"#;

pub const ICON_TABLE: &str = r#"<path d="M3 3h18v18H3zM21 9H3M21 15H3M12 3v18"></path>"#;
