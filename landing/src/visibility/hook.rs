use leptos::html;
use leptos::prelude::*;

use super::{DomViewport, ObserverOptions, Subscription, ViewportObserver, VisibilityDetector};

/// Tracks whether the element bound to the returned `NodeRef` is in the
/// viewport.
///
/// The detector follows the node: mounting attaches it, swapping the node
/// re-attaches, and disposing the owner releases the observer.
///
/// ```rust,ignore
/// let (node_ref, visible) = use_intersection_observer(options);
/// view! { <div node_ref=node_ref class:shown=visible>"..."</div> }
/// ```
pub fn use_intersection_observer(
    options: ObserverOptions,
) -> (NodeRef<html::Div>, ReadSignal<bool>) {
    use_intersection_observer_with(DomViewport, options)
}

/// [`use_intersection_observer`] against an explicit platform.
pub fn use_intersection_observer_with<O>(
    platform: O,
    options: ObserverOptions,
) -> (NodeRef<html::Div>, ReadSignal<bool>)
where
    O: ViewportObserver<Target = web_sys::Element> + 'static,
{
    let node_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let detector = VisibilityDetector::new(platform, options);
    let subscription: Subscription = detector.subscribe(move |v| set_visible.set(v));
    let state = StoredValue::new_local((detector, subscription));

    Effect::new(move |_| {
        let element = node_ref.get().map(web_sys::Element::from);
        state.try_update_value(|(detector, _)| match element {
            Some(element) => detector.attach(element),
            None => detector.detach(),
        });
    });

    on_cleanup(move || {
        state.try_update_value(|(detector, _)| detector.detach());
    });

    (node_ref, visible)
}
