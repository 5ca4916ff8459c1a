mod button;
mod dialog;
mod spinner;

pub(crate) use button::Button;
pub(crate) use dialog::{ConfirmDialog, DialogKind, StatusDialog};
pub(crate) use spinner::Spinner;
