use leptos::prelude::*;

use crate::config::{COPYRIGHT_HOLDER, LICENSE_URL};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-white text-gray-800 text-center py-6">
            <div class="container mx-auto">
                <p>
                    {format!("© {year} {COPYRIGHT_HOLDER} — Released under the ")}
                    <a href=LICENSE_URL target="_blank" rel="noopener noreferrer">
                        "MIT License"
                    </a>
                </p>
            </div>
        </footer>
    }
}
