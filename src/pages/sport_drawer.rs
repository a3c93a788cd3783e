use leptos::prelude::*;

use crate::pages::drawer::Drawer;

#[derive(Debug, Clone, Copy)]
pub struct Sport {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub active: bool,
}

pub const SPORTS: [Sport; 4] = [
    Sport { name: "Badminton", icon: "fa-feather-pointed", href: "/book", active: true },
    Sport { name: "Table Tennis", icon: "fa-table-tennis-paddle-ball", href: "/table-tennis", active: false },
    Sport { name: "Paddle", icon: "fa-baseball-bat-ball", href: "/paddle", active: false },
    Sport { name: "Pickleball", icon: "fa-circle-dot", href: "/pickleball", active: false },
];

#[component]
pub fn SportDrawer(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Drawer
            open=open
            title="Choose Your Sport"
            description="Select a sport to find and book available facilities"
        >
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {SPORTS.into_iter().map(|sport| {
                    let href = sport.active.then_some(sport.href);
                    let select = move |_| {
                        if sport.active {
                            open.set(false);
                        }
                    };
                    let card_class = if sport.active {
                        "relative cursor-pointer overflow-hidden rounded-xl border bg-white p-6 transition-all duration-200 hover:-translate-y-1 hover:shadow-lg"
                    } else {
                        "relative cursor-pointer overflow-hidden rounded-xl border bg-white p-6 opacity-60 transition-all duration-200 hover:opacity-70"
                    };

                    view! {
                        <a href=href class=card_class on:click=select>
                            <div class="flex items-center gap-4">
                                <div class={if sport.active { "rounded-xl bg-[#936de8]/10 p-3" } else { "rounded-xl bg-gray-100 p-3" }}>
                                    <i class={format!("fas {} text-2xl {}", sport.icon, if sport.active { "text-[#936de8]" } else { "text-gray-400" })}></i>
                                </div>
                                <div>
                                    <h3 class={if sport.active { "font-semibold text-blue-600" } else { "font-semibold text-gray-400" }}>
                                        {sport.name}
                                    </h3>
                                    {(!sport.active).then(|| view! {
                                        <span class="mt-1 inline-block rounded bg-gray-100 px-2 py-1 text-xs font-medium text-gray-500">
                                            "Coming Soon"
                                        </span>
                                    })}
                                </div>
                            </div>
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </Drawer>
    }
}
