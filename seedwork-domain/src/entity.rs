//! 实体（Entity）基础抽象
//!
//! 实体以标识区分：两个实体相等当且仅当标识相同，与其它属性无关。
//!
use crate::identity::Identifier;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型
    type Id: Identifier;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 基于标识的相等性
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
