use color_eyre::eyre::Result;
use gatekeeper_adapters::GatekeeperSetting;
use gatekeeper_service::{LoginService, build_login_router, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load configuration
    let settings = GatekeeperSetting::load()?;
    init_tracing(&settings.tracing.filter)?;

    let login_router = build_login_router(&settings)?;

    let login_service = LoginService::new(login_router, &settings.server.login_path)?;

    let listener = TcpListener::bind(&settings.server.address).await?;
    tracing::info!("Starting gatekeeper login service...");

    login_service.run_standalone(listener).await?;

    Ok(())
}
