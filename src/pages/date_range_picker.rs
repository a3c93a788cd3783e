use chrono::NaiveDate;
use leptos::prelude::*;

use crate::data::search_config::DateRange;
use crate::utils::date::{add_months, first_of_month, format_month, format_picker_date, month_grid};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Two-month range calendar in a popover. The parent owns the range; this only
/// reports opens, closes and day picks.
#[component]
pub fn DateRangePicker(
    #[prop(into)] range: Signal<DateRange>,
    #[prop(into)] pending: Signal<Option<NaiveDate>>,
    #[prop(into)] open: Signal<bool>,
    on_open_change: Callback<bool>,
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let (month_offset, set_month_offset) = create_signal(0);

    let label = move || match pending.get() {
        Some(start) => format_picker_date(start),
        None => {
            let range = range.get();
            format!("{} - {}", format_picker_date(range.from()), format_picker_date(range.to()))
        }
    };

    let first_month = move || {
        add_months(first_of_month(range.get_untracked().from()), month_offset.get())
    };

    let day_class = move |day: NaiveDate| {
        let base = "h-9 w-9 rounded-md text-sm transition-colors";
        let in_range = match pending.get() {
            Some(start) => day == start,
            None => {
                let range = range.get();
                day >= range.from() && day <= range.to()
            }
        };
        if in_range {
            format!("{} bg-[#936de8] text-white", base)
        } else {
            format!("{} hover:bg-[#936de8]/10", base)
        }
    };

    let render_month = move |month: NaiveDate| {
        view! {
            <div class="space-y-2">
                <div class="text-center text-sm font-medium">{format_month(month)}</div>
                <div class="grid grid-cols-7 gap-1 text-center text-xs text-gray-500">
                    {WEEKDAYS.into_iter().map(|day| view! { <span>{day}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="grid grid-cols-7 gap-1">
                    {month_grid(month).into_iter().map(|cell| match cell {
                        Some(day) => view! {
                            <button
                                type="button"
                                class={move || day_class(day)}
                                on:click=move |_| on_pick.run(day)
                            >
                                {day.format("%-d").to_string()}
                            </button>
                        }.into_any(),
                        None => view! { <span></span> }.into_any(),
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        }
    };

    view! {
        <div class="relative grid gap-2">
            <button
                id="date"
                type="button"
                class="flex w-full items-center justify-start rounded-md border px-3 py-2 text-left font-normal"
                on:click=move |_| on_open_change.run(!open.get_untracked())
            >
                <i class="fas fa-calendar mr-2 text-gray-500"></i>
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="fixed inset-0 z-30" on:click=move |_| on_open_change.run(false)></div>
                <div class="absolute left-0 top-full z-40 mt-2 rounded-md border bg-white p-3 shadow-lg">
                    <div class="mb-2 flex items-center justify-between">
                        <button type="button" class="px-2 text-gray-500" on:click=move |_| set_month_offset.update(|m| *m -= 1)>
                            <i class="fas fa-chevron-left"></i>
                        </button>
                        <button type="button" class="px-2 text-gray-500" on:click=move |_| set_month_offset.update(|m| *m += 1)>
                            <i class="fas fa-chevron-right"></i>
                        </button>
                    </div>
                    <div class="flex flex-col gap-4 sm:flex-row">
                        {move || {
                            let first = first_month();
                            vec![render_month(first), render_month(add_months(first, 1))]
                        }}
                    </div>
                    <div class="mt-2 flex justify-end">
                        <button
                            type="button"
                            class="rounded-md bg-[#936de8] px-3 py-1 text-sm text-white"
                            on:click=move |_| on_open_change.run(false)
                        >
                            "Done"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
