#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use narratus::logging::init_logging;
    use narratus::server::{self, ServerConfig};

    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    init_logging(config.log_format)?;

    server::run(config).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
