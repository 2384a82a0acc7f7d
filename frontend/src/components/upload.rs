//! File submission component.
//!
//! Owns the submission lifecycle: validation, multipart upload to the
//! calculation service, and the status transitions shown to the user.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::config::{BACKEND_URL, NO_FILE_NOTICE};
use crate::services::calculate_beta;
use crate::types::{Phase, ResultView};

#[component]
pub fn UploadSection(
    phase: ReadSignal<Phase>,
    set_phase: WriteSignal<Phase>,
    busy: ReadSignal<bool>,
    set_busy: WriteSignal<bool>,
    set_result: WriteSignal<Option<ResultView>>,
) -> impl IntoView {
    let (notice, set_notice) = create_signal(None::<String>);

    let on_calculate = move |_| {
        // A submission in flight keeps the button disabled, but the click
        // handler is the airtight barrier against a second submit.
        if busy.get_untracked() {
            return;
        }

        let Some(input) = input_by_id("file") else {
            return;
        };
        let files = selected_files(&input);
        if files.is_empty() {
            log::warn!("⚠️ Submit attempted without a file");
            set_notice.set(Some(NO_FILE_NOTICE.to_string()));
            return;
        }

        let valuation_date = input_by_id("valuation_date")
            .map(|input| input.value())
            .filter(|value| !value.is_empty());

        set_notice.set(None);

        // Busy state must be visible before any asynchronous work starts.
        set_busy.set(true);
        set_phase.set(Phase::Uploading);

        log::info!("📤 Submitting {} file(s)", files.len());

        spawn_local(async move {
            // Released on every exit path out of this future.
            let _busy = BusyGuard::engage(move || set_busy.set(false));

            let request = calculate_beta(files, valuation_date, BACKEND_URL);
            set_phase.set(Phase::Calculating);

            match request.await {
                Ok(result) => {
                    log::info!(
                        "✅ Beta calculated: {} across {} holdings",
                        result.portfolio_beta,
                        result.details.len()
                    );
                    set_result.set(Some(ResultView::from_result(&result)));
                    set_phase.set(Phase::Success);
                }
                Err(err) => {
                    log::error!("❌ Calculation failed: {}", err);
                    set_phase.set(Phase::Failed);
                    set_notice.set(Some(err.notice()));
                }
            }
        });
    };

    view! {
        <div class="upload-section" id="uploadSection">
            <div class="form-row">
                <label for="file">"Portfolio files"</label>
                <input
                    type="file"
                    id="file"
                    accept=".csv,.xlsx"
                    multiple=true
                    disabled=busy
                />
            </div>

            <div class="form-row">
                <label for="valuation_date">"Valuation date (optional)"</label>
                <input
                    type="date"
                    id="valuation_date"
                    disabled=busy
                />
            </div>

            <button class="btn btn-primary" id="calcBtn" on:click=on_calculate disabled=busy>
                {move || if busy.get() { "Working..." } else { "Calculate Beta" }}
            </button>

            <div class="status-row">
                <Show
                    when=move || busy.get()
                    fallback=|| view! { }
                >
                    <span class="spinner" id="spinner"></span>
                </Show>
                <span class="status-text" id="status">{move || phase.get().label()}</span>
            </div>

            <Show
                when=move || notice.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message" id="notice">
                    {move || notice.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}

/// Look up one of the form's input elements.
fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Collect the input's current file selection in order.
fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = input.files() {
        for i in 0..list.length() {
            if let Some(file) = list.get(i) {
                files.push(file);
            }
        }
    }
    files
}

/// Drop guard releasing the busy state when the submission future ends.
struct BusyGuard<F: FnMut()> {
    release: Option<F>,
}

impl<F: FnMut()> BusyGuard<F> {
    fn engage(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnMut()> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        if let Some(mut release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_busy_guard_releases_on_drop() {
        let released = Cell::new(false);
        {
            let _guard = BusyGuard::engage(|| released.set(true));
            assert!(!released.get());
        }
        assert!(released.get());
    }

    #[test]
    fn test_busy_guard_releases_on_early_exit() {
        fn bails_out(released: &Cell<u32>) -> Option<()> {
            let _guard = BusyGuard::engage(|| released.set(released.get() + 1));
            None?;
            Some(())
        }

        let released = Cell::new(0);
        assert!(bails_out(&released).is_none());
        assert_eq!(released.get(), 1);
    }
}
