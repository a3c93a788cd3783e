use leptos::prelude::*;

use crate::data::search_result::BookingSlot;

#[component]
pub fn BookingSlotCard(booking: BookingSlot) -> impl IntoView {
    let hidden = booking.hidden_other_slots();
    let chips = booking
        .visible_other_slots()
        .iter()
        .map(|other| {
            let chip_class = if other.available {
                "rounded border border-[#936de8] bg-[#936de8]/10 px-2 py-1 text-xs font-medium text-[#936de8] transition-colors"
            } else {
                "rounded border border-gray-200 bg-gray-50 px-2 py-1 text-xs font-medium text-gray-400 transition-colors"
            };
            view! { <div class=chip_class>{other.time.clone()}</div> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="w-full rounded-xl border bg-white p-6 shadow-sm">
            <div class="grid gap-4 sm:grid-cols-[1fr,auto]">
                <div class="space-y-1">
                    <div class="flex items-center gap-2 text-sm text-gray-500">
                        <i class="fas fa-clock"></i>
                        <time>{booking.time_window()}</time>
                        <span>"•"</span>
                        <time>{booking.date_label()}</time>
                    </div>
                    <p class="text-xs font-medium text-[#936de8]">{booking.organization.clone()}</p>
                    <h3 class="text-lg font-semibold">{booking.location.clone()}</h3>
                    <div class="flex items-center gap-2 text-sm text-gray-500">
                        <i class="fas fa-location-dot"></i>
                        <span>{booking.distance_label()}</span>
                    </div>

                    <div class="border-t border-dashed pt-3">
                        <p class="mb-2 text-sm font-medium text-gray-600">"Also available at:"</p>
                        <div class="flex flex-wrap gap-1">
                            {chips}
                            {(hidden > 0).then(|| view! {
                                <div class="rounded border border-gray-200 bg-gray-50 px-2 py-1 text-xs font-medium text-gray-400">
                                    {format!("+{} more", hidden)}
                                </div>
                            })}
                        </div>
                    </div>
                </div>

                <div class="flex flex-row items-start justify-between gap-2 border-t pt-3 sm:flex-col sm:items-end sm:justify-end sm:border-0 sm:pt-0">
                    <div class="flex flex-col items-start sm:items-end">
                        <span class="text-xs text-gray-500">"starting from"</span>
                        <span class="text-lg">{booking.price_label()}</span>
                    </div>
                    <button type="button" class="rounded-lg bg-[#936de8] px-4 py-2 text-white hover:bg-[#936de8]/90">
                        "Book Now"
                        <i class="fas fa-arrow-right ml-2"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}
