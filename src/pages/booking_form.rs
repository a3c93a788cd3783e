use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::server_fn::error::NoCustomError;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::data::app_state::use_app_state;
use crate::data::booking_form::{resolve_initial_config, results_route, BookingFormState};
use crate::data::result_store::SessionResultStore;
use crate::data::search_client::{resolve_endpoint, SearchClient};
use crate::data::search_config::{ConsecutiveSlots, SearchConfig, TimeOfDay};
use crate::error::SearchError;
use crate::pages::date_range_picker::DateRangePicker;
use crate::settings::ClientSettings;
use crate::utils::date::today;

#[server(GetClientSettings)]
pub async fn get_client_settings() -> Result<ClientSettings, ServerFnError> {
    use crate::settings::{Settings, SETTINGS_FILE};

    let settings = Settings::from_yaml(SETTINGS_FILE)
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(e.to_string()))?;
    Ok(settings.client())
}

async fn run_search(
    config: SearchConfig,
    cached_settings: StoredValue<Option<ClientSettings>>,
) -> Result<String, SearchError> {
    let client_settings = match cached_settings.try_get_value().flatten() {
        Some(settings) => settings,
        None => {
            let settings = get_client_settings()
                .await
                .map_err(|e| SearchError::NotConfigured(e.to_string()))?;
            cached_settings.try_set_value(Some(settings.clone()));
            settings
        }
    };

    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    let endpoint = resolve_endpoint(&client_settings.search_endpoint, origin.as_deref());

    SearchClient::new(endpoint)
        .submit(&config, &SessionResultStore)
        .await
}

/// Booking search form. With `on_close` it renders as an overlay with a Cancel
/// button; without, as the full-page variant.
#[component]
pub fn BookingForm(
    #[prop(optional_no_strip)] initial_config: Option<SearchConfig>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let store = use_app_state();
    let navigate = use_navigate();
    let cached_settings = StoredValue::new(None::<ClientSettings>);

    let form = RwSignal::new(BookingFormState::initialize(
        &store.get_untracked(),
        initial_config.as_ref(),
        today(),
    ));

    Effect::new(move |_| {
        let shared = store.get();
        let resolved = resolve_initial_config(&shared, initial_config.as_ref(), today());
        if form.with_untracked(|f| f.config() != &resolved) {
            form.update(|f| f.resync(&shared, initial_config.as_ref(), today()));
        }
    });

    let write_through = move |written: Option<SearchConfig>| {
        if let Some(config) = written {
            store.write_config(config);
        }
    };

    let toggle_time_slot = move |slot: TimeOfDay| {
        write_through(form.try_update(|f| f.toggle_time_slot(slot)));
    };

    let set_consecutive_slots = move |count: ConsecutiveSlots| {
        write_through(form.try_update(|f| f.set_consecutive_slots(count)));
    };

    let set_all_locations = move |all_locations: bool| {
        write_through(form.try_update(|f| f.set_all_locations(all_locations)));
    };

    let on_pick = Callback::new(move |day| {
        write_through(form.try_update(|f| f.pick_date(day)).flatten());
    });

    let on_open_change = Callback::new(move |open| {
        form.update(|f| f.set_picker_open(open));
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(config) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = run_search(config, cached_settings).await;
            form.try_update(|f| f.finish_submit(&outcome));

            if let Some(path) = results_route(&outcome) {
                if let Some(on_close) = on_close {
                    on_close.run(());
                }
                navigate(&path, Default::default());
            }
        });
    };

    let is_overlay = on_close.is_some();
    let config = move || form.with(|f| f.config().clone());
    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <div class="space-y-6">
            {move || form.with(|f| f.error().map(str::to_string)).map(|message| view! {
                <div class="relative rounded border border-red-400 bg-red-100 px-4 py-3 text-red-700" role="alert">
                    <strong class="font-bold">"Error:"</strong>
                    <span class="block sm:inline">" " {message}</span>
                </div>
            })}

            <form class="space-y-6" on:submit=handle_submit>
                <div class="space-y-2">
                    <label class="font-medium">"What venues should we look for?"</label>
                    <div class="max-w-[300px]">
                        <div class="grid grid-cols-2 rounded-lg border bg-gray-50/50 p-1">
                            {[(false, "My Favourites"), (true, "All Locations")].into_iter().map(|(value, label)| view! {
                                <button
                                    type="button"
                                    class={move || if config().all_locations == value {
                                        "relative rounded-md px-4 py-2 text-sm transition-all duration-300 bg-[#936de8] text-white"
                                    } else {
                                        "relative rounded-md px-4 py-2 text-sm transition-all duration-300 text-gray-600 hover:bg-[#936de8]/10"
                                    }}
                                    on:click=move |_| set_all_locations(value)
                                >
                                    {label}
                                </button>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="space-y-2">
                    <label class="font-medium">"Select the dates you want to play at?"</label>
                    <DateRangePicker
                        range=Signal::derive(move || form.with(|f| f.config().date_range))
                        pending=Signal::derive(move || form.with(|f| f.pending_start()))
                        open=Signal::derive(move || form.with(|f| f.picker_open()))
                        on_open_change=on_open_change
                        on_pick=on_pick
                    />
                </div>

                <div class="space-y-2">
                    <label class="font-medium">"Select preferred time slots"</label>
                    <div class="grid grid-cols-3 gap-2">
                        {TimeOfDay::ALL.into_iter().map(|slot| view! {
                            <button
                                type="button"
                                class={move || if config().is_selected(slot) {
                                    "flex flex-col items-center rounded-lg border px-2 py-3 transition-all duration-200 border-[#936de8] bg-[#936de8]/10"
                                } else {
                                    "flex flex-col items-center rounded-lg border px-2 py-3 transition-all duration-200 border-gray-200 hover:border-[#936de8]/50 hover:bg-[#936de8]/5"
                                }}
                                on:click=move |_| toggle_time_slot(slot)
                            >
                                <i class={move || format!(
                                    "fas {} mb-1 {}",
                                    slot.icon(),
                                    if config().is_selected(slot) { "text-[#936de8]" } else { "text-gray-500" }
                                )}></i>
                                <span class="text-sm font-medium">{slot.label()}</span>
                                <span class="text-xs text-gray-500">{slot.hours()}</span>
                            </button>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="space-y-2">
                    <div class="flex items-center gap-2">
                        <label class="font-medium">"Search for back-to-back sessions?"</label>
                        <span
                            class="cursor-help text-gray-400"
                            title="Consecutive slots are back-to-back time slots. For example, if you select 2 consecutive slots, you'll book two slots right after each other."
                        >
                            <i class="fas fa-circle-info"></i>
                        </span>
                    </div>
                    <div class="flex gap-4" role="radiogroup">
                        {ConsecutiveSlots::ALL.into_iter().map(|count| {
                            let id = format!("slot-{}", count);
                            view! {
                                <div class="flex items-center space-x-2">
                                    <input
                                        type="radio"
                                        name="consecutive-slots"
                                        id={id.clone()}
                                        value={count.as_str()}
                                        class="accent-[#936de8]"
                                        prop:checked={move || config().consecutive_slots == count}
                                        on:change=move |_| set_consecutive_slots(count)
                                    />
                                    <label for=id>{count.as_str()}</label>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="space-y-3 pt-2">
                    <button
                        type="submit"
                        class={move || if submitting() {
                            "h-11 w-full rounded-md bg-[#936de8] text-white animate-pulse disabled:opacity-60"
                        } else {
                            "h-11 w-full rounded-md bg-[#936de8] text-white hover:bg-[#936de8]/90 disabled:opacity-60"
                        }}
                        prop:disabled={move || !form.with(|f| f.can_submit())}
                    >
                        {move || if submitting() {
                            view! {
                                <div class="flex items-center justify-center gap-2">
                                    <div class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></div>
                                    <span>"Searching..."</span>
                                </div>
                            }.into_any()
                        } else {
                            view! { <span>"Search Available Courts"</span> }.into_any()
                        }}
                    </button>

                    {is_overlay.then(|| view! {
                        <button
                            type="button"
                            class="h-11 w-full rounded-md border text-gray-700 hover:bg-gray-50"
                            prop:disabled=submitting
                            on:click=move |_| {
                                if let Some(on_close) = on_close {
                                    on_close.run(());
                                }
                            }
                        >
                            "Cancel"
                        </button>
                    })}
                </div>
            </form>
        </div>
    }
}
