pub mod mock;
pub mod state;
pub mod telemetry_client;
pub mod transport;
pub mod websocket;

pub use state::ConnectionState;
pub use telemetry_client::{TelemetryClient, CLOSE_TIMEOUT};
pub use transport::{Connector, TelemetryStream};
pub use websocket::WebSocketConnector;
