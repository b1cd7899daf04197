pub use habilita_test_utils::prelude::*;

pub use crate::server::data::edital::EditalRepository;

mod claim_next_pending;
mod claim_pending;
mod find_stuck;
mod mark_completed;
mod mark_failed;
mod reset_to_pending;
