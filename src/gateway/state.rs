use crate::gateway::client::ShareItClient;

/// State shared by gateway handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub client: ShareItClient,
}

impl GatewayState {
    pub fn new(client: ShareItClient) -> Self {
        Self { client }
    }
}
