pub use habilita_test_utils::prelude::*;

pub use crate::server::data::expiry_alert::ExpiryAlertRepository;

mod find_undispatched;
mod mark_dispatched;
mod try_create;
