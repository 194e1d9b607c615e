//! Server URL composition for connection establishment.
//!
//! The connection routine identifies each client session by a path segment in
//! the URL it dials. Composition consumes one identifier from the generator
//! per call, so two calls yield two different URLs even for the same
//! host/port pair.

use tracing::trace;

use types::{SERVER_PATH_PREFIX, WS_SCHEME};

use crate::error::ProtocolResult;
use crate::ident::UidGenerator;

/// Compose the WebSocket URL a client session connects with:
/// `ws://<host>:<port>/tw/<id>`.
pub fn server_url(host: &str, port: u16, ids: &UidGenerator) -> ProtocolResult<String> {
    let client_id = ids.next_id()?;
    let url = format!(
        "{}://{}:{}/{}/{}",
        WS_SCHEME, host, port, SERVER_PATH_PREFIX, client_id
    );
    trace!(url = %url, "composed server url");
    Ok(url)
}
