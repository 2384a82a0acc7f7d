//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Portfolio Beta Calculator"</h1>
            <p class="subtitle">
                "Upload your broker holdings (CSV or XLSX) to compute the "
                "weighted beta and total value of your portfolio."
            </p>
        </div>
    }
}
