//! SqlValuer：自定义“转存储值”转换。
//!
//! 字段类型实现该 trait 后，在 `sql_model!` 里声明 `valuer: true`，
//! 提取行数据时就用 `value()` 的结果代替字段原值。

use crate::value::SqlValue;

/// Valuer 错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sqlmock valuer error: {0}")]
pub struct ValuerError(pub String);

impl ValuerError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// 把字段值转换成存储值的 trait。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

// 持有 `Box<dyn SqlValuer>` 字段的 model 仍可 derive Clone。
dyn_clone::clone_trait_object!(SqlValuer);
