//! Protocol constants shared by every Telewire client component.

/// Protocol version implemented by this client.
pub const PROTOCOL_VERSION: u8 = 1;

/// URL scheme for server connections. The transport upgrades to a WebSocket
/// over this scheme; TLS termination is the deployment's concern.
pub const WS_SCHEME: &str = "ws";

/// Fixed path segment of the client registration URL. The generated client
/// identifier is appended after it: `ws://host:port/tw/<id>`.
pub const SERVER_PATH_PREFIX: &str = "tw";
