use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::result_store::SessionResultStore;
use crate::data::results::load_results;
use crate::data::search_result::SearchResult;
use crate::error::ResultsError;
use crate::pages::booking_form::BookingForm;
use crate::pages::drawer::Drawer;
use crate::pages::search_summary::SearchSummary;
use crate::pages::slot_card::BookingSlotCard;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    // None while the stored payload has not been read yet.
    let loaded = RwSignal::new(None::<Result<SearchResult, ResultsError>>);

    Effect::new(move |_| {
        let route_id = params.with(|p| p.get("id")).unwrap_or_default();
        loaded.set(Some(load_results(&SessionResultStore, &route_id)));
    });

    move || match loaded.get() {
        None => view! {
            <div class="flex min-h-screen items-center justify-center bg-gray-50">"Loading..."</div>
        }
        .into_any(),
        Some(Err(e)) => view! {
            <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50">
                <p class="mb-4 text-red-600">{e.to_string()}</p>
                <a href="/book" class="rounded bg-blue-500 px-4 py-2 font-bold text-white hover:bg-blue-700">
                    "Go Back to Search"
                </a>
            </div>
        }
        .into_any(),
        Some(Ok(results)) => view! { <ResultsView results=results/> }.into_any(),
    }
}

#[component]
fn ResultsView(results: SearchResult) -> impl IntoView {
    let drawer_open = RwSignal::new(false);
    let SearchResult { config, slots, .. } = results;

    let venue_count = slots.len();
    let summary_config = config.clone();
    let open_drawer = Callback::new(move |_| drawer_open.set(true));
    let close_drawer = Callback::new(move |_| drawer_open.set(false));

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="mx-auto max-w-4xl space-y-6 p-4">
                <div class="flex flex-col gap-2">
                    <div class="flex items-center justify-between">
                        <h1 class="text-2xl font-bold text-[#001C3C]">"Available Badminton Slots"</h1>
                        <SearchSummary config=summary_config on_edit=open_drawer/>
                    </div>
                    <span class="text-sm text-gray-500">
                        {format!("Availability found across {} venues", venue_count)}
                    </span>
                </div>

                <div class="grid gap-4">
                    {slots.into_iter().map(|booking| view! { <BookingSlotCard booking=booking/> }).collect::<Vec<_>>()}
                </div>
            </div>

            <Drawer
                open=drawer_open
                title="Refine Your Search"
                description="Adjust your search criteria to find more slots"
            >
                <BookingForm initial_config=config.clone() on_close=close_drawer/>
            </Drawer>
        </div>
    }
}
