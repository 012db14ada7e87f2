//! 可写入 mock 行、也可绑定到占位符的存储值类型。

use std::borrow::Cow;
use std::fmt;

use time::format_description::well_known::Rfc3339;

/// 存储值（mock 行里的一个单元格）。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 文本值转为原始字节，其余值原样返回。
    ///
    /// mock 驱动读出的文本列是字节序列，valuer 产出的字符串按此规则归一。
    pub fn into_bytes_if_text(self) -> Self {
        match self {
            Self::String(s) => Self::Bytes(s.into_owned().into_bytes()),
            other => other,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Self::DateTime(dt) => {
                let s = dt.format(&Rfc3339).map_err(|_| fmt::Error)?;
                f.write_str(&s)
            }
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_signed {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for SqlValue {
            fn from(v: $t) -> Self {
                Self::I64(v as i64)
            }
        })+
    };
}

macro_rules! from_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for SqlValue {
            fn from(v: $t) -> Self {
                Self::U64(v as u64)
            }
        })+
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

#[cfg(test)]
mod tests {
    use super::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_option_some() {
        assert_eq!(SqlValue::from_option(Some(123_i64)), SqlValue::I64(123));
    }

    #[test]
    fn from_option_none() {
        assert_eq!(SqlValue::from(None::<String>), SqlValue::Null);
    }

    #[test]
    fn unsigned_widths_collapse_to_u64() {
        assert_eq!(SqlValue::from(1630248918_u32), SqlValue::U64(1630248918));
        assert_eq!(SqlValue::from(7_u8), SqlValue::U64(7));
    }

    #[test]
    fn text_becomes_bytes_only_for_strings() {
        assert_eq!(
            SqlValue::from("1,2").into_bytes_if_text(),
            SqlValue::Bytes(b"1,2".to_vec())
        );
        assert_eq!(SqlValue::I64(3).into_bytes_if_text(), SqlValue::I64(3));
        assert_eq!(SqlValue::Null.into_bytes_if_text(), SqlValue::Null);
    }

    #[test]
    fn display_formats_datetime_as_rfc3339() {
        let v = SqlValue::from(time::macros::datetime!(2021-08-29 14:55:18 UTC));
        assert_eq!(v.to_string(), "2021-08-29T14:55:18Z");
        assert_eq!(SqlValue::Bytes(b"abc".to_vec()).to_string(), "abc");
        assert_eq!(SqlValue::Null.to_string(), "NULL");
    }
}
