use std::str::FromStr;

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl FromStr for GatewayPublisherVia {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logs" => Ok(GatewayPublisherVia::Logs),
            "memory" => Ok(GatewayPublisherVia::Memory),
            other => Err(format!("unknown event publisher {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_parse_publisher_via() {
        assert_eq!(Ok(GatewayPublisherVia::Logs), "logs".parse());
        assert_eq!(Ok(GatewayPublisherVia::Memory), "Memory".parse());
        assert!("sns".parse::<GatewayPublisherVia>().is_err());
    }
}
