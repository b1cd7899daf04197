pub use habilita_test_utils::prelude::*;

pub use crate::server::service::document::DocumentService;
