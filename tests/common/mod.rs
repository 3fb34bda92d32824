//! Helpers shared by the integration tests.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the encoder.
///
/// Events are only emitted if the crate is built with the `tracing`
/// feature. Use the RUST_LOG environment variable to select what to see.
///
/// E.g. To see every record being encoded:
///   RUST_LOG=rr_encode=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Returns the wire format of a query header with one question and one
/// additional record.
///
/// The encoder doesn’t do message headers, so the tests build them here.
pub fn query_header(id: u16) -> Vec<u8> {
    let mut header = Vec::with_capacity(12);
    header.extend_from_slice(&id.to_be_bytes());
    header.extend_from_slice(&[0x01, 0x00]); // RD
    header.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 1]);
    header
}
