use leptos::prelude::*;

use crate::pages::booking_form::BookingForm;

const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1612872087720-bb876e2e67d1";

#[component]
fn InfoCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] under_development: bool,
) -> impl IntoView {
    if under_development {
        return view! {
            <div class="relative rounded-xl border-2 border-dashed border-gray-300 bg-gray-100 p-4 text-center opacity-60">
                <div class="absolute -top-3 left-1/2 flex -translate-x-1/2 items-center space-x-1 bg-gray-100/80 px-2 py-1 backdrop-blur-sm">
                    <i class="fas fa-lock text-gray-500"></i>
                    <span class="text-xs font-medium text-gray-500">"Under development"</span>
                </div>
                <div class="mx-auto flex h-12 w-12 items-center justify-center rounded-full bg-gray-200">
                    <i class={format!("fas {} text-xl text-gray-400", icon)}></i>
                </div>
                <h3 class="mt-4 text-lg font-semibold text-gray-600">{title}</h3>
                <p class="mt-2 text-base text-gray-500">{description}</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="text-center">
            <div class="mx-auto flex h-12 w-12 items-center justify-center rounded-full bg-[#936de8]/10">
                <i class={format!("fas {} text-xl text-[#936de8]", icon)}></i>
            </div>
            <h3 class="mt-4 text-lg font-semibold text-gray-900">{title}</h3>
            <p class="mt-2 text-base text-gray-600">{description}</p>
        </div>
    }
    .into_any()
}

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <div class="relative flex min-h-[85vh] items-center justify-center">
                <div class="absolute inset-0 z-0">
                    <img src=HERO_IMAGE_URL alt="Badminton court" class="h-full w-full object-cover"/>
                    <div class="absolute inset-0 bg-gradient-to-b from-black/50 to-black/80"></div>
                </div>

                <div class="relative z-20 mx-auto w-full max-w-3xl px-4 pt-12 sm:px-6 sm:pt-16 lg:px-8">
                    <div class="mb-8 text-center">
                        <h1 class="mb-4 text-3xl font-bold text-white sm:text-4xl md:text-5xl">
                            "Find and book badminton courts"
                        </h1>
                        <p class="mb-8 text-lg text-white/90 sm:text-xl">
                            "Compare prices and availability across London's best venues"
                        </p>
                    </div>

                    <div class="rounded-2xl bg-white p-6 shadow-2xl">
                        <BookingForm/>
                    </div>
                </div>
            </div>

            <div class="bg-gray-50 py-16">
                <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                    <div class="mb-12 text-center">
                        <h2 class="text-3xl font-bold text-gray-900">"Why book with Sportscanner?"</h2>
                        <p class="mt-4 text-lg text-gray-600">
                            "We make it easy to find and book badminton courts across London"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-4">
                        <InfoCard
                            icon="fa-clock"
                            title="Real-time Availability"
                            description="Check court availability instantly across multiple venues"
                        />
                        <InfoCard
                            icon="fa-location-dot"
                            title="30+ Venues"
                            description="Find courts near you with our extensive network of venues"
                        />
                        <InfoCard
                            icon="fa-shield-halved"
                            title="Secure Booking"
                            description="Book with confidence using our secure payment system"
                            under_development=true
                        />
                        <InfoCard
                            icon="fa-trophy"
                            title="Best Price Guarantee"
                            description="Get the best rates with our price match guarantee"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
