use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::data::app_state::use_app_state;
use crate::pages::login_modal::LoginModal;
use crate::pages::sport_drawer::SportDrawer;
use crate::utils::date::today;
use crate::utils::postcode::{format_postcode, is_valid_postcode};

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 6] = [
    Stat { icon: "fa-magnifying-glass", value: "95%", label: "Faster Search Experience" },
    Stat { icon: "fa-clock", value: "24/7", label: "Real-time Availability" },
    Stat { icon: "fa-location-dot", value: "30+", label: "Sports Venues tracked" },
    Stat { icon: "fa-satellite-dish", value: "90%", label: "London city coverage" },
    Stat { icon: "fa-users", value: "1k+", label: "Active Users" },
    Stat { icon: "fa-trophy", value: "4", label: "Sports Available" },
];

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] under_development: bool,
) -> impl IntoView {
    let card_class = if under_development {
        "relative rounded-xl border-2 border-dashed border-gray-300 bg-gray-100 p-6 opacity-60 grayscale"
    } else {
        "relative rounded-xl bg-white p-6 shadow-md transition-all duration-300 hover:-translate-y-1 hover:shadow-lg"
    };

    view! {
        <div class=card_class>
            {under_development.then(|| view! {
                <div class="absolute -top-3 left-1/2 flex -translate-x-1/2 items-center space-x-1 bg-white px-2 py-1">
                    <i class="fas fa-lock text-gray-500"></i>
                    <span class="text-xs font-medium text-gray-500">Under development</span>
                </div>
            })}
            <div class="mb-4 flex items-center">
                <div class={if under_development { "mr-4 rounded-full bg-gray-200 p-3" } else { "mr-4 rounded-full bg-[#936de8]/10 p-3" }}>
                    <i class={format!("fas {} text-xl {}", icon, if under_development { "text-gray-400" } else { "text-[#936de8]" })}></i>
                </div>
                <h3 class={if under_development { "text-xl font-semibold text-gray-600" } else { "text-xl font-semibold text-[#001C3C]" }}>
                    {title}
                </h3>
            </div>
            <p class={if under_development { "text-gray-500" } else { "text-gray-600" }}>{description}</p>
        </div>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = use_app_state();
    let (postcode, set_postcode) = create_signal(String::new());
    let postcode_valid = Memo::new(move |_| is_valid_postcode(&postcode.get()));
    let show_login = RwSignal::new(false);
    let drawer_open = RwSignal::new(false);

    // Every visit to the landing page starts a fresh search.
    Effect::new(move |_| {
        store.reset(today());
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if postcode_valid.get_untracked() {
            show_login.set(true);
        }
    };

    let continue_as_guest = Callback::new(move |_| {
        show_login.set(false);
        drawer_open.set(true);
    });

    view! {
        <div class="relative min-h-screen">
            <div class="pointer-events-none absolute inset-0 bg-gradient-to-br from-[#936de8]/5 to-[#ab92ec]/5"></div>
            <div class="relative mx-auto max-w-screen-xl px-4 py-12 sm:px-6 sm:py-16 lg:px-8">
                <div class="space-y-8 text-center">
                    <div class="mx-auto max-w-3xl space-y-4">
                        <h1 class="text-4xl font-bold tracking-tight sm:text-5xl md:text-6xl">
                            <span class="bg-gradient-to-r from-[#936de8] to-[#ab92ec] bg-clip-text text-transparent">Sportscanner</span>
                            <span class="text-[#001C3C]">", your ultimate sports hub"</span>
                        </h1>
                        <p class="mx-auto max-w-2xl text-xl text-gray-600 sm:text-2xl">
                            "Discover, Compare, and Book Sports Facilities Across London"
                        </p>
                        <form class="mx-auto flex w-full max-w-md pt-4" on:submit=handle_submit>
                            <div class="relative flex w-full overflow-hidden rounded-xl border border-gray-200 bg-white focus-within:border-[#936de8] focus-within:ring-2 focus-within:ring-[#936de8]">
                                <input
                                    type="text"
                                    placeholder="Enter your postcode to get started"
                                    class="flex-grow border-none bg-transparent px-4 py-3 focus:outline-none"
                                    prop:value=postcode
                                    on:input=move |ev| set_postcode(format_postcode(&event_target_value(&ev)))
                                />
                                <button
                                    type="submit"
                                    aria-label="Submit postcode"
                                    class={move || if postcode_valid.get() {
                                        "px-5 bg-[#001C3C] hover:bg-[#001C3C]/90 transition-colors"
                                    } else {
                                        "px-5 bg-gray-400 cursor-not-allowed transition-colors"
                                    }}
                                    prop:disabled=move || !postcode_valid.get()
                                >
                                    <i class="fas fa-magnifying-glass text-white"></i>
                                </button>
                            </div>
                        </form>
                    </div>

                    <div class="overflow-hidden py-8">
                        <div class="flex animate-[scroll_30s_linear_infinite] gap-4 py-4">
                            {STATS.iter().chain(STATS.iter()).map(|stat| view! {
                                <div class="w-[280px] flex-none rounded-xl border bg-white p-6 shadow-sm transition-shadow hover:shadow-md">
                                    <div class="mx-auto mb-4 flex h-12 w-12 items-center justify-center rounded-full bg-blue-50 text-[#001C3C]">
                                        <i class={format!("fas {} text-xl", stat.icon)}></i>
                                    </div>
                                    <h3 class="text-2xl font-bold text-[#001C3C] sm:text-3xl">{stat.value}</h3>
                                    <p class="mt-2 text-gray-600">{stat.label}</p>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <section class="bg-gradient-to-b from-white to-gray-50 py-16">
                        <div class="mb-12 text-center">
                            <h2 class="text-3xl font-bold text-[#001C3C] sm:text-4xl">"Experience the Power of Smart Scheduling"</h2>
                            <p class="mx-auto mt-4 max-w-2xl text-xl text-gray-600">
                                "Revolutionize your sports booking experience with Sportscanner's intelligent features."
                            </p>
                        </div>
                        <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                            <FeatureCard
                                icon="fa-magnifying-glass"
                                title="Effortless Discovery"
                                description="Search across a vast network of London's top sports venues in a single, streamlined interface."
                            />
                            <FeatureCard
                                icon="fa-chart-column"
                                title="Advanced Search Analytics"
                                description="Combine available slots for seamless multi-hour bookings, ensuring you get the perfect playing time."
                            />
                            <FeatureCard
                                icon="fa-calendar-check"
                                title="Book with Ease"
                                description="Secure your spot quickly and conveniently, all within the Sportscanner platform."
                            />
                            <FeatureCard
                                icon="fa-location-dot"
                                title="Find Your Local Fit"
                                description="Discover incredible sports opportunities near you, making it easier to stay active and connected to the London sports scene."
                                under_development=true
                            />
                        </div>
                    </section>
                </div>
            </div>

            <LoginModal open=show_login on_continue_as_guest=continue_as_guest/>
            <SportDrawer open=drawer_open/>

            <footer class="border-t bg-white/50">
                <div class="mx-auto max-w-screen-xl px-4 py-8 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-gray-500">"© 2024 Sportscanner. All rights reserved."</p>
                </div>
            </footer>
        </div>
    }
}
