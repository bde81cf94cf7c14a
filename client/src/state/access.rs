//! Entrance gate: whether the main page may render.
//!
//! DESIGN
//! ======
//! The credential host is optional and injected. When it is absent (local
//! development, plain browsers) access is granted immediately. When it is
//! present the gate stays up until the host confirms a selected key.
//!
//! Selection is optimistic: after the host's selection flow returns, access
//! is granted without asking the host again. A late check result never
//! revokes a grant.

use crate::net::credential::CredentialHost;

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessState {
    /// Host present, check still running. The gate screen renders.
    Checking,
    /// Host reported no usable key.
    Locked,
    /// Main content renders. Terminal.
    #[default]
    Granted,
}

impl AccessState {
    /// State before any check resolves.
    #[must_use]
    pub fn initial<H: CredentialHost>(host: Option<&H>) -> Self {
        if host.is_some() { Self::Checking } else { Self::Granted }
    }

    #[must_use]
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }

    /// Fold in a credential check result. `None` means no host was found.
    #[must_use]
    pub fn resolve(self, has_key: Option<bool>) -> Self {
        match (self, has_key) {
            (Self::Granted, _) | (_, None | Some(true)) => Self::Granted,
            (_, Some(false)) => Self::Locked,
        }
    }
}

/// Ask the host whether a key is selected. `None` when there is no host.
pub async fn check_credential<H: CredentialHost>(host: Option<&H>) -> Option<bool> {
    match host {
        Some(host) => Some(host.has_selected_key().await),
        None => None,
    }
}

/// Run the host's key selection flow and return the state to adopt. The
/// flow's outcome is not observable, so completion is treated as success.
/// Without a host there is nothing to select and `None` is returned.
pub async fn request_selection<H: CredentialHost>(host: Option<&H>) -> Option<AccessState> {
    let host = host?;
    host.open_select_key().await;
    Some(AccessState::Granted)
}
