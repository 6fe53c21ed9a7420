include!("../../lib.rs");
use std::net::SocketAddr;
use lambda_http::{run, Error};
use crate::catalog::controller::build_router;
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, RuntimeMode};
use crate::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());

    let state = AppState::new(&config).await
        .map_err(|err| Error::from(err.to_string()))?;
    let app = build_router(state);

    tracing::info!(branch_id = config.branch_id.as_str(), runtime = %config.runtime, "starting catalog");
    match config.runtime {
        RuntimeMode::Lambda => run(app).await,
        RuntimeMode::Local => {
            let addr: SocketAddr = config.bind_address.parse()?;
            tracing::info!(%addr, "listening");
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
