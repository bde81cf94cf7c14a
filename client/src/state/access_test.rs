use std::cell::Cell;

use futures::executor::block_on;

use super::*;

struct FakeHost {
    has_key: bool,
    checks: Cell<usize>,
    selections: Cell<usize>,
}

impl FakeHost {
    fn new(has_key: bool) -> Self {
        Self { has_key, checks: Cell::new(0), selections: Cell::new(0) }
    }
}

impl CredentialHost for FakeHost {
    async fn has_selected_key(&self) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.has_key
    }

    async fn open_select_key(&self) {
        self.selections.set(self.selections.get() + 1);
    }
}

const NO_HOST: Option<&FakeHost> = None;

// =============================================================
// Initial state
// =============================================================

#[test]
fn without_host_access_is_granted_before_any_check() {
    assert_eq!(AccessState::initial(NO_HOST), AccessState::Granted);
    assert!(AccessState::initial(NO_HOST).is_granted());
}

#[test]
fn with_host_gate_starts_checking() {
    let host = FakeHost::new(true);
    assert_eq!(AccessState::initial(Some(&host)), AccessState::Checking);
}

#[test]
fn default_is_granted() {
    assert_eq!(AccessState::default(), AccessState::Granted);
}

// =============================================================
// Check resolution
// =============================================================

#[test]
fn check_without_host_resolves_granted() {
    let result = block_on(check_credential(NO_HOST));
    assert_eq!(result, None);
    assert_eq!(AccessState::Checking.resolve(result), AccessState::Granted);
}

#[test]
fn check_with_selected_key_grants() {
    let host = FakeHost::new(true);
    let result = block_on(check_credential(Some(&host)));
    assert_eq!(AccessState::Checking.resolve(result), AccessState::Granted);
    assert_eq!(host.checks.get(), 1);
}

#[test]
fn check_without_selected_key_locks() {
    let host = FakeHost::new(false);
    let result = block_on(check_credential(Some(&host)));
    assert_eq!(AccessState::Checking.resolve(result), AccessState::Locked);
}

#[test]
fn late_negative_check_never_revokes_grant() {
    assert_eq!(AccessState::Granted.resolve(Some(false)), AccessState::Granted);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selection_grants_optimistically() {
    // Host still reports no key; the grant happens anyway.
    let host = FakeHost::new(false);
    let next = block_on(request_selection(Some(&host)));
    assert_eq!(next, Some(AccessState::Granted));
    assert_eq!(host.selections.get(), 1);
    assert_eq!(host.checks.get(), 0);
}

#[test]
fn selection_without_host_is_noop() {
    assert_eq!(block_on(request_selection(NO_HOST)), None);
}
