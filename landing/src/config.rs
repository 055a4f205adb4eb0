// Site configuration, single source of truth for everything the page says
// about the product.

use crate::visibility::Threshold;

pub const PRODUCT_NAME: &str = "Schemly";
pub const REPOSITORY_URL: &str = "https://github.com/DevPlus31/schemly";
pub const LICENSE_URL: &str = "https://github.com/DevPlus31/schemly/blob/main/LICENSE";
pub const COPYRIGHT_HOLDER: &str = "DevPlus31";

/// Share of a section that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: Threshold = match Threshold::new(0.1) {
    Some(threshold) => threshold,
    None => panic!("reveal threshold must be within 0.0..=1.0"),
};

#[cfg(debug_assertions)]
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// One platform in the install widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallTab {
    pub id: &'static str,
    pub label: &'static str,
    pub command: &'static str,
}

pub const DEFAULT_INSTALL_TAB: &str = "brew";

pub const INSTALL_TABS: &[InstallTab] = &[
    InstallTab {
        id: "brew",
        label: "macOS",
        command: "brew tap DevPlus31/homebrew-schemly && brew install devplus31/schemly",
    },
    // Switch to `winget install DevPlus31.Schemly` once the package is published.
    InstallTab {
        id: "winget",
        label: "Windows",
        command: "Soon! Check Github Releases.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Rust,
    Code,
    Link,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Rust,
        title: "Blazing Fast & Reliable",
        description: "Built with Rust for maximum performance and safety.",
    },
    Feature {
        icon: FeatureIcon::Code,
        title: "YAML Configuration",
        description: "Define your models in simple, readable YAML.",
    },
    Feature {
        icon: FeatureIcon::Link,
        title: "Relationship Support",
        description: "Full support for all Laravel relationship types.",
    },
    Feature {
        icon: FeatureIcon::Table,
        title: "Pivot Tables",
        description: "Automatic pivot table generation for many-to-many.",
    },
];
