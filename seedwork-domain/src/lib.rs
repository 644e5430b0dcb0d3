//! 领域层基础库（seedwork-domain）
//!
//! 提供构建 CQRS 应用所需的领域层构件：
//! - 标识（`identity`）、实体（`entity`）与值对象（`value_object`）
//! - 不可变聚合根（`aggregate`）与其累积的领域事件（`domain_event`）
//! - 聚合仓储协议及内存实现（`persist`），聚合获取器（`obtainer`）
//! - 工作单元（`unit_of_work`）与规约（`specification`）
//!
//! 本 crate 只定义领域层接口与最小必要的错误类型，不依赖任何具体存储或传输实现。
//!
pub mod aggregate;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod identity;
pub mod obtainer;
pub mod persist;
pub mod specification;
pub mod unit_of_work;
pub mod value_object;

// 允许在本 crate 内部通过 ::seedwork_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::seedwork_domain 路径。
extern crate self as seedwork_domain;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
