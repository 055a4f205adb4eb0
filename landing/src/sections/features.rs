use leptos::prelude::*;

use super::icons::FeatureGlyph;
use crate::components::AnimatedSection;
use crate::config::{FEATURES, FeatureIcon};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-6 bg-white">
            <div class="container mx-auto">
                <AnimatedSection>
                    <h3 class="text-3xl font-bold text-center text-gray-800 mb-12">
                        "Core Features"
                    </h3>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <FeatureCard
                                        icon=feature.icon
                                        title=feature.title
                                        description=feature.description
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: FeatureIcon, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-md text-center transition-transform duration-300 transform hover:-translate-y-2 hover:shadow-xl flex flex-col items-center">
            <FeatureGlyph icon=icon />
            <h4 class="text-xl font-bold text-gray-800 mb-2">{title}</h4>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
