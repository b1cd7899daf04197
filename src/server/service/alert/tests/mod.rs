pub use habilita_test_utils::prelude::*;

pub use crate::server::notifier::NotifierClient;
pub use crate::server::service::alert::AlertService;

mod crossed_thresholds;
mod run_sweep;
