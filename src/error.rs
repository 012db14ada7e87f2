//! 行构建过程中的错误。

use crate::rows::RowsError;
use crate::valuer::ValuerError;

/// 提取行值或组装结果集时的错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    #[error("{0}")]
    Valuer(#[from] ValuerError),
    #[error("{0}")]
    Rows(#[from] RowsError),
    /// 字段描述里有该字段，但 `ModelValues::field_value` 没有给出匹配的值。
    #[error("sqlmock field `{field}` has no matching value")]
    FieldValueMismatch { field: &'static str },
}
