//! Shared response bodies.

use serde::Serialize;

/// `{ "ok": true }`, returned by the health check and by deletes.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
