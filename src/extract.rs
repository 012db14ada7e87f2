//! 字段遍历：按声明顺序从 model 类型推导列名、从 model 实例提取行值。
//!
//! 嵌入 model 的字段在嵌入位置展开；resolver 解析不出列名的字段静默跳过。

use crate::error::MockError;
use crate::model::{FieldMeta, FieldValue, ModelValues, SqlModel};
use crate::resolver::ColumnResolver;
use crate::value::SqlValue;

/// valuer 产出文本时的归一方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuerText {
    /// 文本转为原始字节（mock 驱动读出的文本列即字节序列）
    #[default]
    Bytes,
    /// 保持字符串
    String,
}

fn resolve(resolver: &dyn ColumnResolver, field: &FieldMeta) -> Option<String> {
    let column = resolver.column(field).filter(|c| !c.is_empty());
    if column.is_none() {
        tracing::trace!(field = field.rust, tag = field.tag, "field excluded: no column");
    }
    column
}

/// 从 model 类型推导列名（声明顺序，嵌入字段展开）。
pub fn columns_from_model_type<T: SqlModel>(resolver: &dyn ColumnResolver) -> Vec<String> {
    let mut columns = Vec::new();
    collect_columns(T::FIELDS, resolver, false, &mut columns);
    columns
}

/// 与 `columns_from_model_type` 相同，但排除 resolver 判定为主键/自增的列。
pub fn insert_columns_from_model_type<T: SqlModel>(resolver: &dyn ColumnResolver) -> Vec<String> {
    let mut columns = Vec::new();
    collect_columns(T::FIELDS, resolver, true, &mut columns);
    columns
}

fn collect_columns(
    fields: &'static [FieldMeta],
    resolver: &dyn ColumnResolver,
    skip_identity: bool,
    out: &mut Vec<String>,
) {
    for field in fields {
        if let Some(nested) = field.embedded {
            collect_columns(nested, resolver, skip_identity, out);
            continue;
        }
        if skip_identity && resolver.is_identity(field) {
            continue;
        }
        if let Some(column) = resolve(resolver, field) {
            out.push(column);
        }
    }
}

/// 从 model 实例提取一行值，顺序与 `columns_from_model_type` 一致。
///
/// 有列名的字段必须取到对应的值，否则返回 `MockError::FieldValueMismatch`。
pub fn values_from_model<T: SqlModel>(
    model: &T,
    resolver: &dyn ColumnResolver,
    valuer_text: ValuerText,
) -> Result<Vec<SqlValue>, MockError> {
    let mut values = Vec::new();
    collect_values(T::FIELDS, model, resolver, valuer_text, &mut values)?;
    Ok(values)
}

fn collect_values(
    fields: &'static [FieldMeta],
    model: &dyn ModelValues,
    resolver: &dyn ColumnResolver,
    valuer_text: ValuerText,
    out: &mut Vec<SqlValue>,
) -> Result<(), MockError> {
    for field in fields {
        if let Some(nested) = field.embedded {
            let Some(FieldValue::Embedded(inner)) = model.field_value(field.rust) else {
                return Err(MockError::FieldValueMismatch { field: field.rust });
            };
            collect_values(nested, inner, resolver, valuer_text, out)?;
            continue;
        }
        if resolve(resolver, field).is_none() {
            continue;
        }
        let value = match model.field_value(field.rust) {
            Some(FieldValue::Raw(v)) => v,
            Some(FieldValue::Valuer(res)) => {
                let v = res?;
                match valuer_text {
                    ValuerText::Bytes => v.into_bytes_if_text(),
                    ValuerText::String => v,
                }
            }
            // 手写的 ModelValues 可能与 FIELDS 不一致
            Some(FieldValue::Embedded(_)) | None => {
                return Err(MockError::FieldValueMismatch { field: field.rust });
            }
        };
        out.push(value);
    }
    Ok(())
}
