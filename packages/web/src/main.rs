use dioxus::prelude::*;

use views::{Home, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Connect once; handlers get the handle through router state.
    let config = api::db::DbConfig::from_env();
    let db = api::db::connect(&config)
        .await
        .expect("Failed to connect to database");

    // API routes first, then the Dioxus application for everything else
    let router = axum::Router::new()
        .merge(api::routes::api_router(db))
        .serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
