use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::sport_drawer::SportDrawer;

pub const LOGO_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/sportscanner-v2-purple-transparent%20bg-PfekjV0cIdNycje0NDyZF84cwZRijN.png";

#[component]
pub fn Header() -> impl IntoView {
    let drawer_open = RwSignal::new(false);

    view! {
        <nav class="sticky top-0 z-10 border-b bg-white/50 backdrop-blur-sm">
            <div class="mx-auto max-w-screen-xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-3">
                        <img src=LOGO_URL alt="Sportscanner Logo" width="32" height="32" class="h-8 w-8"/>
                        <span class="text-xl font-bold text-[#001C3C]">Sportscanner</span>
                    </A>
                    <button
                        class="hidden items-center rounded-md border px-4 py-2 text-sm font-medium hover:bg-gray-50 sm:flex"
                        on:click=move |_| drawer_open.set(true)
                    >
                        "Get Started"
                        <i class="fas fa-arrow-right ml-2"></i>
                    </button>
                </div>
            </div>
            <SportDrawer open=drawer_open/>
        </nav>
    }
}
