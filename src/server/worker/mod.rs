pub mod handler;
pub mod pool;

pub use handler::WorkerJobHandler;
pub use pool::{WorkerPool, WorkerPoolConfig};
