//! halo-sqlmock-rows：把带列标签的 model 转成 SQL mock 结果集与 INSERT 语句的测试辅助库。

pub mod error;
pub mod extract;
pub mod flavor;
pub mod mock;
pub mod model;
#[cfg(test)]
mod model_tests;
pub mod resolver;
pub mod rows;
#[cfg(test)]
mod rows_tests;
mod string_builder;
pub mod value;
pub mod valuer;

pub use crate::error::MockError;
pub use crate::extract::{
    ValuerText, columns_from_model_type, insert_columns_from_model_type, values_from_model,
};
pub use crate::flavor::Flavor;
pub use crate::mock::{Mocker, ModelSource, insert_sql, insert_sql_pattern, model_to_rows};
pub use crate::model::{FieldMeta, FieldValue, ModelValues, SqlModel};
pub use crate::resolver::{
    ColumnResolver, DEFAULT_TAG_DELIMITER, SharedResolver, SnakeCaseResolver, TagResolver,
    column_from_tag, default_resolver, snake_case, tag_segments,
};
pub use crate::rows::{MockRows, RowsError};
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};

/// 便捷命名空间：允许 `use halo_sqlmock::sqlmock::{...}` 形式导入。
pub mod sqlmock {
    pub use crate::*;
}

#[cfg(test)]
pub(crate) mod fixtures;
