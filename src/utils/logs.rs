use std::str::FromStr;
use tracing::Level;

pub(crate) fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .try_init();
}
