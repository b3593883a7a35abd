#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use kitchensink_web::core::auth::dashboard_for;
    use kitchensink_web::core::http::ReqwestTransport;
    use kitchensink_web::core::navigation::HeadlessNavigator;
    use kitchensink_web::core::{AuthClient, ClientConfig, MemoryStorage};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    tracing::info!(base_url = %config.base_url, "config loaded");

    let (Ok(email), Ok(password)) = (
        std::env::var("KITCHENSINK_EMAIL"),
        std::env::var("KITCHENSINK_PASSWORD"),
    ) else {
        tracing::error!("KITCHENSINK_EMAIL and KITCHENSINK_PASSWORD must be set");
        std::process::exit(2);
    };

    let client = AuthClient::new(
        config,
        MemoryStorage::new(),
        ReqwestTransport::new(),
        HeadlessNavigator::new(),
    );

    if let Err(e) = client.auth().login(&email, &password).await {
        tracing::error!(error = %e, status = ?e.status(), "login failed");
        std::process::exit(1);
    }

    match client.users().me().await {
        Ok(me) => {
            tracing::info!(
                id = %me.id,
                name = %me.name,
                email = %me.email,
                dashboard = dashboard_for(&client.claims()),
                "session ok"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "profile request failed");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no native entry point in browser builds, see lib.rs
}
