use dioxus::prelude::*;

use forms::SignUpConfig;
use ui::ToastProvider;
use views::{Profile, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/sign-up")]
    SignUp {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/profile")]
    Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
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
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fail fast on bad backend settings instead of on the first sign-up
    let backend = api::auth::get_backend()
        .await
        .expect("Failed to configure auth backend");
    tracing::info!("Forwarding auth calls to {}", backend.base_url());

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

/// Parse the bundled `signup.toml`, falling back to defaults.
fn load_config() -> SignUpConfig {
    SignUpConfig::from_toml(include_str!("../signup.toml")).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", SignUpConfig::filename(), e);
        SignUpConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            duration_secs: config.toast_duration_secs,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/sign-up`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::SignUp {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = SignUpConfig::from_toml(include_str!("../signup.toml")).unwrap();
        assert_eq!(config, SignUpConfig::default());
    }

    #[test]
    fn test_routes_match_destinations() {
        use forms::Destination;

        assert_eq!(Route::Profile {}.to_string(), Destination::Profile.path());
        assert_eq!(Route::SignIn {}.to_string(), Destination::SignIn.path());
    }
}
