use crate::dto::Dto;

/// 应用层查询（Query）
///
/// 表达只读意图，不改变领域状态。
/// - 结果为 [`Dto`](crate::dto::Dto)，由唯一的查询处理器产出；
/// - 查询可直连读模型或投影存储（见 [`QueryRepository`](crate::query_repository::QueryRepository)）。
pub trait Query: Send + Sync + 'static {
    /// 查询的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 查询返回的数据传输对象
    type Dto: Dto;
}
