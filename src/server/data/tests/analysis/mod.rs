pub use habilita_test_utils::prelude::*;

pub use crate::server::data::analysis::AnalysisRepository;

mod delete_results;
mod insert_results;
