#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::routing::get;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use sportscanner::app::*;
    use sportscanner::data::mock_search::{init_venues, mock_search_handler};
    use sportscanner::settings::{Settings, SETTINGS_FILE};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match Settings::from_yaml(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load {}: {}", SETTINGS_FILE, e);
            std::process::exit(1);
        }
    };

    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            log::error!("Invalid leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let mut app = Router::new();
    if settings.mock_search {
        match init_venues(settings.mock_venues_file.as_deref()) {
            Ok(count) => log::info!("Mock search endpoint enabled with {} venues", count),
            Err(e) => log::error!("Failed to load mock venues: {}", e),
        }
        app = app.route("/api/mock-search", get(mock_search_handler));
    }
    log::info!("Search endpoint: {}", settings.search_endpoint);

    let app = app
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    log::info!("listening on http://{}", &addr);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        log::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
