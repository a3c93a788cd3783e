use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{FlatRoutes, Route, Router},
    ParamSegment, StaticSegment,
};

use crate::data::app_state::AppStateStore;
use crate::pages::book::BookingPage;
use crate::pages::header::Header;
use crate::pages::landing::LandingPage;
use crate::pages::results::ResultsPage;
use crate::utils::date::today;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Stylesheet id="leptos" href="/pkg/sportscanner.css"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <Link rel="preconnect" href="https://fonts.googleapis.com"/>
                <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <Link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet"/>
                <Link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"/>
                <MetaTags/>
            </head>
            <body class="font-[Inter]">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    AppStateStore::provide(today());

    view! {
        <Title text="Sportscanner - Your Ultimate Sports Hub"/>
        <Meta name="description" content="Discover, Compare, and Book Sports Facilities Across London"/>
        <Router>
            <Header/>
            <main>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("book") view=BookingPage/>
                    <Route
                        path=(StaticSegment("book"), StaticSegment("results"), ParamSegment("id"))
                        view=ResultsPage
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
