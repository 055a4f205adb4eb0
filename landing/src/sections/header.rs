use leptos::prelude::*;

use super::icons::{ICON_BOX, Icon};
use crate::config::{PRODUCT_NAME, REPOSITORY_URL};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-800 shadow-md text-white top-0 z-50">
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center space-x-3">
                    <Icon shapes=ICON_BOX size="32" class="text-blue-500" />
                    <h1 class="text-2xl font-bold">{PRODUCT_NAME}</h1>
                </div>
                <nav class="hidden md:flex items-center space-x-6">
                    <a href="#features" class="text-gray-200 hover:text-blue-500 transition duration-300">
                        "Features"
                    </a>
                    <a
                        href=REPOSITORY_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600 transition duration-300 shadow-sm"
                    >
                        "View on GitHub"
                    </a>
                </nav>
            </div>
        </header>
    }
}
