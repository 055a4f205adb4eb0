use leptos::prelude::*;

use crate::classes::class_names;
use crate::config::REVEAL_THRESHOLD;
use crate::visibility::{ObserverOptions, use_intersection_observer};

const TRANSITION: &str = "transition-all duration-700 ease-out";
const SHOWN: &str = "opacity-100 translate-y-0";
const HIDDEN: &str = "opacity-0 translate-y-5";

/// Classes for a revealable block in the given visibility state.
pub fn reveal_classes(visible: bool) -> String {
    class_names([TRANSITION, if visible { SHOWN } else { HIDDEN }])
}

/// Fades and slides its children in once 10% of them are on screen.
///
/// Scrolling away hides them again unless `once` is set.
#[component]
pub fn AnimatedSection(
    /// Keep the content shown after the first reveal
    #[prop(optional)]
    once: bool,
    children: Children,
) -> impl IntoView {
    let options = ObserverOptions::default()
        .with_threshold(REVEAL_THRESHOLD)
        .freeze_once_visible(once);
    let (node_ref, visible) = use_intersection_observer(options);

    view! {
        <div node_ref=node_ref class=move || reveal_classes(visible.get())>
            {children()}
        </div>
    }
}
