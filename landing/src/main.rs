// Schemly Landing Page — Leptos 0.8 Edition
// Developed by DevPlus31 (c)2025

mod classes;
mod components;
mod config;
mod sections;
mod visibility;

use leptos::prelude::*;
use sections::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config::LOG_LEVEL)
            .build(),
    );
    tracing::info!("mounting {} landing page", config::PRODUCT_NAME);
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <div class="bg-gray-50 font-sans antialiased">
            <Header />
            <main>
                <Hero />
                <Features />
            </main>
            <Footer />
        </div>
    }
}
