//! 内存基础设施：读模型仓储与上下文装配
//!
mod module;
mod query_repository;

pub use module::*;
pub use query_repository::InMemoryBankAccountQueryRepository;
