use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为查询结果的载体，只包含原始类型字段，序列化友好；
/// - 与领域模型解耦，避免将聚合或实体直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}
