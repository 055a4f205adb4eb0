use leptos::prelude::*;

use super::install::InstallTabs;
use crate::config::{DEFAULT_INSTALL_TAB, INSTALL_TABS, PRODUCT_NAME};

#[component]
pub fn Hero() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(DEFAULT_INSTALL_TAB);

    view! {
        <section class="bg-gray-800 text-white text-center py-20 px-6">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">{PRODUCT_NAME}</h2>
            <p class="text-lg md:text-xl max-w-3xl mx-auto mb-12 text-gray-300">
                "Schemly is a command-line tool built with Rust for maximum performance and reliability. "
                "It streamlines Laravel development by automating the creation of essential code components "
                "like models, controllers, and migrations directly from simple, human-readable YAML files."
            </p>
            <p class="mb-4 text-gray-400 text-lg font-light">
                "Supports Apple Silicon and Windows x86-64/ARM64"
            </p>
            <InstallTabs
                tabs=INSTALL_TABS
                active=active_tab
                on_change=move |id: &'static str| set_active_tab.set(id)
            />
        </section>
    }
}
