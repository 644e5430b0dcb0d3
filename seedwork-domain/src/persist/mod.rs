//! 持久化端口（persist）
//!
//! 定义聚合仓储协议（按标识加载/保存/删除）以及用于测试与本地开发的内存实现。
//! 具体存储后端由上层提供实现并注入。
//!
mod in_memory;
mod repository;

pub use in_memory::InMemoryRepository;
pub use repository::Repository;
