// Reusable page components

mod animated_section;

pub use animated_section::AnimatedSection;
