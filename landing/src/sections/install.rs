//! Tabbed install widget: one tab per platform, showing its command.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

use crate::classes::class_names;
use crate::config::InstallTab;

const TAB_BASE: &str = "flex-1 py-2 px-4 rounded-md text-sm font-medium transition-all duration-200";
const TAB_ACTIVE: &str = "bg-blue-500 text-white shadow-sm";
const TAB_IDLE: &str = "text-gray-300 hover:text-white hover:bg-gray-600";

/// How long the copy button shows its confirmation.
const COPIED_FEEDBACK: std::time::Duration = std::time::Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CopyError {
    #[error("no browser window")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// What the copy button currently says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    pub fn after(result: &Result<(), CopyError>) -> Self {
        match result {
            Ok(()) => CopyState::Copied,
            Err(_) => CopyState::Failed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyState::Idle => "Copy",
            CopyState::Copied => "Copied",
            CopyState::Failed => "Failed",
        }
    }
}

/// Writes `text` to the clipboard, resolving once the browser accepts or
/// refuses it.
pub async fn copy_to_clipboard(text: &str) -> Result<(), CopyError> {
    let window = web_sys::window().ok_or(CopyError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
        CopyError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    })
}

pub fn tab_classes(active: bool) -> String {
    class_names([TAB_BASE, if active { TAB_ACTIVE } else { TAB_IDLE }])
}

/// Command for the tab with `id`; empty when no tab matches.
pub fn command_for(tabs: &[InstallTab], id: &str) -> &'static str {
    tabs.iter()
        .find(|tab| tab.id == id)
        .map(|tab| tab.command)
        .unwrap_or_default()
}

#[component]
pub fn InstallTabs(
    tabs: &'static [InstallTab],
    #[prop(into)] active: Signal<&'static str>,
    #[prop(into)] on_change: Callback<&'static str>,
) -> impl IntoView {
    let (copy_state, set_copy_state) = signal(CopyState::Idle);
    let command = move || command_for(tabs, active.get());

    let copy_command = move |_| {
        let text = command_for(tabs, active.get_untracked());
        spawn_local(async move {
            let result = copy_to_clipboard(text).await;
            if let Err(err) = &result {
                tracing::warn!("copy failed: {err}");
            }
            set_copy_state.set(CopyState::after(&result));
            set_timeout(move || set_copy_state.set(CopyState::Idle), COPIED_FEEDBACK);
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto mb-6">
            <div class="flex bg-gray-700 rounded-lg p-1">
                {tabs
                    .iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || tab_classes(active.get() == tab.id)
                                on:click=move |_| {
                                    tracing::debug!(tab = tab.id, "install tab selected");
                                    on_change.run(tab.id)
                                }
                            >
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-4 bg-gray-900 rounded-lg p-4 border border-gray-600 flex items-center justify-between gap-4">
                <code class="text-green-400 text-sm font-mono">{command}</code>
                <button
                    class="text-xs uppercase tracking-wide text-gray-400 hover:text-white transition duration-200"
                    on:click=copy_command
                >
                    {move || copy_state.get().label()}
                </button>
            </div>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // An unfocused headless page may refuse clipboard access; either way the
    // outcome has to come back from the browser rather than be assumed.
    #[wasm_bindgen_test]
    async fn clipboard_write_settles() {
        match copy_to_clipboard("brew install devplus31/schemly").await {
            Ok(()) | Err(CopyError::Rejected(_)) => {}
            Err(CopyError::NoWindow) => panic!("browser tests run with a window"),
        }
    }
}
