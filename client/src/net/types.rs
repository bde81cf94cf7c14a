//! JSON bodies exchanged with the server API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /api/concierge` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConciergeRequest {
    pub message: String,
}

/// `POST /api/concierge` response body. `reply` is always displayable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConciergeReply {
    pub reply: String,
}
