use leptos::prelude::*;

use crate::data::search_config::SearchConfig;

/// "Filters" pill on the results page. Hovering shows the search that produced
/// the results; clicking opens the refine drawer.
#[component]
pub fn SearchSummary(config: Option<SearchConfig>, on_edit: Callback<()>) -> impl IntoView {
    let summary = config.as_ref().map(SearchConfig::summary);

    view! {
        <button
            type="button"
            class="flex h-9 items-center gap-2 rounded-full border bg-white px-3 hover:bg-gray-50"
            title=summary
            on:click=move |_| on_edit.run(())
        >
            <i class="fas fa-sliders"></i>
            <span class="text-sm font-medium">"Filters"</span>
        </button>
    }
}
