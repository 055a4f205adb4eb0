//! Browser binding: `IntersectionObserver` via web-sys.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{NotifyFn, ObserverHandle, ObserverOptions, ViewportObserver, VisibilityError};

/// The document viewport, observed through `window.IntersectionObserver`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl ViewportObserver for DomViewport {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        options: &ObserverOptions,
        mut notify: NotifyFn,
    ) -> Result<ObserverHandle, VisibilityError> {
        if web_sys::window().is_none() {
            return Err(VisibilityError::Unavailable("no window".into()));
        }

        // Entries in one batch are in time order; only the latest matters.
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let last = entries.length().checked_sub(1).map(|i| entries.get(i));
                if let Some(entry) = last {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    notify(entry.is_intersecting());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold.get()));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| VisibilityError::Unavailable(describe(&err)))?;
        observer.observe(target);

        Ok(ObserverHandle::new(move || {
            observer.disconnect();
            // The closure must outlive the observer that calls it.
            drop(callback);
        }))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}
