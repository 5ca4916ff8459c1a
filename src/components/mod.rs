//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use ui::{Button, ConfirmDialog, DialogKind, Spinner, StatusDialog};
