//! 领域建模宏（seedwork-macros）
//!
//! - `#[entity_id]`：为单字段 tuple struct 生成带前缀校验的标识类型
//! - `#[value_object]`：为值对象合并所需派生
//!
//! 生成代码统一通过 `::seedwork_domain` 路径引用运行时支持。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 标识类型宏
///
/// 参数：`#[entity_id(prefix = "acc-", label = "Bank account id")]`
/// - `prefix`：标识必须携带的前缀，默认空
/// - `label`：错误信息中的名称，默认结构体名
///
/// 生成：`PREFIX` 常量、`parse`/`generate` 构造函数、
/// `Identifier`/`Display`/`FromStr`/`TryFrom`/`AsRef<str>` 以及带校验的 serde 实现。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏
///
/// 合并/追加派生：Clone, (Debug 可控), PartialEq, Eq。
/// 参数：`#[value_object(debug = true|false)]`，默认 true
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
