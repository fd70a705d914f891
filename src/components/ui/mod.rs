mod alert;
mod button;
mod pagination;
mod spinner;
pub(crate) mod toast;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use pagination::Pagination;
pub(crate) use spinner::Spinner;
pub(crate) use toast::Toaster;
