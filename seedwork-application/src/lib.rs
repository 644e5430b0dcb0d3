//! 应用层基础库（seedwork-application）
//!
//! - 命令/查询契约（`command`、`query`、`*_handler`）与总线（`command_bus`、`query_bus`）
//! - 基于容器解析处理器的总线实现（`container_command_bus`、`container_query_bus`）
//! - 延迟投递的领域事件总线（`deferred_event_bus`）
//! - 命令装饰器：事务（`transactional_command_bus`）、事件冲刷（`event_flush_command_bus`），
//!   以及组装二者的 `CommandPipeline`
//! - 读侧：投影过滤条件（`filter`）与读模型仓储（`query_repository`）
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod container;
pub mod container_command_bus;
pub mod container_query_bus;
pub mod context;
pub mod deferred_event_bus;
pub mod dto;
pub mod error;
pub mod event_bus;
pub mod event_flush_command_bus;
pub mod filter;
pub mod pipeline;
pub mod query;
pub mod query_bus;
pub mod query_handler;
pub mod query_repository;
pub mod transactional_command_bus;

pub use container::InMemoryContainer;
pub use container_command_bus::ContainerCommandBus;
pub use container_query_bus::ContainerQueryBus;
pub use deferred_event_bus::DeferredDomainEventBus;
pub use event_flush_command_bus::{DomainEventFlushCommandBus, FlushPolicy};
pub use pipeline::CommandPipeline;
pub use transactional_command_bus::TransactionalCommandBus;
