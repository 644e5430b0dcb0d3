//! 银行账户示例上下文（bank-account）
//!
//! 基于 `seedwork-domain` / `seedwork-application` 构建的完整用例：
//! - `domain`：`BankAccount` 聚合、金额值对象、流水实体与领域事件
//! - `application`：存款/取款/转账命令、账户状态查询、投影与默认事件处理器
//! - `infrastructure`：由聚合存储推导投影的读模型仓储，以及内存装配 `BankAccountModule`
//!
pub mod application;
pub mod domain;
pub mod infrastructure;
