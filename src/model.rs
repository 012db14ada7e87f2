//! Model：带列标签的业务 struct 的字段元数据与取值。
//!
//! Rust 无运行时反射；`sql_model!` 宏在编译期为 struct 生成按声明顺序排列的
//! 字段描述（`FieldMeta`）以及按字段名取值的逻辑，提取器据此遍历字段。

use crate::value::SqlValue;
use crate::valuer::ValuerError;

/// 单个声明字段的静态描述。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    /// Rust 字段名（用于生成取值代码）
    pub rust: &'static str,
    /// 字段的“原始名”，供按命名规则推导列名的 resolver 使用。
    ///
    /// 默认等于 `rust`，可在宏里用 `orig:` 显式指定（例如 `CreateTime`）。
    pub orig: &'static str,
    /// 原始 tag 字符串（例如 `column:id;primaryKey`）；嵌入字段为空串。
    pub tag: &'static str,
    /// 嵌入（匿名）model 的字段描述；非嵌入字段为 `None`。
    pub embedded: Option<&'static [FieldMeta]>,
}

impl FieldMeta {
    pub const fn new(rust: &'static str, orig: &'static str, tag: &'static str) -> Self {
        Self {
            rust,
            orig,
            tag,
            embedded: None,
        }
    }

    pub const fn embed(rust: &'static str, fields: &'static [FieldMeta]) -> Self {
        Self {
            rust,
            orig: rust,
            tag: "",
            embedded: Some(fields),
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }
}

/// 单个字段交给提取器的值。
pub enum FieldValue<'a> {
    /// 字段原值
    Raw(SqlValue),
    /// `SqlValuer::value()` 的结果
    Valuer(Result<SqlValue, ValuerError>),
    /// 嵌入 model，由提取器递归展开
    Embedded(&'a dyn ModelValues),
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw(v) => f.debug_tuple("Raw").field(v).finish(),
            Self::Valuer(r) => f.debug_tuple("Valuer").field(r).finish(),
            // 嵌入 model 不要求实现 Debug
            Self::Embedded(_) => f.write_str("Embedded(..)"),
        }
    }
}

/// 按字段名取值（object safe，用于递归遍历嵌入 model）。
pub trait ModelValues {
    /// 取 `rust_field` 对应字段的值；未知字段返回 `None`。
    ///
    /// valuer 字段只在被调用时才计算，被排除的字段不会触发转换。
    fn field_value(&self, rust_field: &str) -> Option<FieldValue<'_>>;
}

/// 由 `sql_model!` 为业务 struct 实现的 trait。
pub trait SqlModel: ModelValues {
    /// 按声明顺序排列的字段描述。
    const FIELDS: &'static [FieldMeta];
}

/// 声明一个可被转换为 mock 行的业务 struct。
///
/// 每个字段三选一：
/// - `{ tag: "column:xx" }`：普通字段，值经 `SqlValue::from` 转换（字段需 `Clone`）
/// - `{ tag: "column:xx", valuer: true }`：字段类型实现了 `SqlValuer`
/// - `{ embed: Base }`：嵌入 model，其列在此处展开
///
/// 普通字段可选 `orig: "Name"` 覆盖原始字段名。`tag` 必须写在最前，
/// `orig` 与 `valuer` 的先后不限。
///
/// ```ignore
/// #[derive(Clone, Default)]
/// struct User { base: BaseModel, name: String, cache: String }
///
/// halo_sqlmock::sql_model! {
///     impl User {
///         base:  { embed: BaseModel },
///         name:  { tag: "column:name" },
///         cache: { tag: "-" },
///     }
/// }
/// ```
#[macro_export]
macro_rules! sql_model {
    (
        impl $ty:ty {
            $( $field:ident : $body:tt ),* $(,)?
        }
    ) => {
        impl $crate::model::SqlModel for $ty {
            const FIELDS: &'static [$crate::model::FieldMeta] = &[
                $( $crate::__sql_model_meta!($field $body) ),*
            ];
        }

        impl $crate::model::ModelValues for $ty {
            fn field_value(
                &self,
                rust_field: &str,
            ) -> ::std::option::Option<$crate::model::FieldValue<'_>> {
                match rust_field {
                    $(
                        stringify!($field) => ::std::option::Option::Some(
                            $crate::__sql_model_value!(self $field $body)
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}

/// 宏内部 helper：生成单个字段的 `FieldMeta`。
#[doc(hidden)]
#[macro_export]
macro_rules! __sql_model_meta {
    ($field:ident { embed: $embed:ty $(,)? }) => {
        $crate::model::FieldMeta::embed(
            stringify!($field),
            <$embed as $crate::model::SqlModel>::FIELDS,
        )
    };
    ($field:ident { tag: $tag:literal $(, orig: $orig:literal)? $(, valuer: $valuer:tt)? $(,)? }) => {
        $crate::model::FieldMeta::new(
            stringify!($field),
            $crate::__sql_model_orig!(stringify!($field) $(, $orig)?),
            $tag,
        )
    };
    ($field:ident { tag: $tag:literal, valuer: $valuer:tt, orig: $orig:literal $(,)? }) => {
        $crate::model::FieldMeta::new(stringify!($field), $orig, $tag)
    };
}

/// 宏内部 helper：生成单个字段的 `FieldValue`。
#[doc(hidden)]
#[macro_export]
macro_rules! __sql_model_value {
    ($this:ident $field:ident { embed: $embed:ty $(,)? }) => {
        $crate::model::FieldValue::Embedded(&$this.$field)
    };
    ($this:ident $field:ident { tag: $tag:literal $(, orig: $orig:literal)? $(, valuer: $valuer:tt)? $(,)? }) => {
        $crate::__sql_model_convert!($this $field $(, $valuer)?)
    };
    ($this:ident $field:ident { tag: $tag:literal, valuer: $valuer:tt, orig: $orig:literal $(,)? }) => {
        $crate::__sql_model_convert!($this $field, $valuer)
    };
}

/// 宏内部 helper：按 `valuer:` 选择取值方式。
#[doc(hidden)]
#[macro_export]
macro_rules! __sql_model_convert {
    ($this:ident $field:ident) => {
        $crate::model::FieldValue::Raw($crate::value::SqlValue::from(
            ::std::clone::Clone::clone(&$this.$field),
        ))
    };
    ($this:ident $field:ident, false) => {
        $crate::__sql_model_convert!($this $field)
    };
    ($this:ident $field:ident, true) => {{
        use $crate::valuer::SqlValuer as _;
        $crate::model::FieldValue::Valuer($this.$field.value())
    }};
}

/// 宏内部 helper：支持 `orig:` 的可选参数。
#[doc(hidden)]
#[macro_export]
macro_rules! __sql_model_orig {
    ($default:expr) => {
        $default
    };
    ($default:expr, $custom:expr) => {
        $custom
    };
}
