//! 测试共用的 model。

use crate::value::SqlValue;
use crate::valuer::{SqlValuer, ValuerError};

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BaseModel {
    pub id: u64,
    pub create_time: u32,
}

crate::sql_model! {
    impl BaseModel {
        id:          { tag: "column:id;primary" },
        create_time: { tag: "column:create_time" },
    }
}

/// 以 `1,2,3` 文本形式存储的字节列表。
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Uint8Slice(pub Vec<u8>);

impl SqlValuer for Uint8Slice {
    fn value(&self) -> Result<SqlValue, ValuerError> {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        Ok(SqlValue::from(parts.join(",")))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TestModel {
    pub base: BaseModel,
    pub name: String,
    pub foobar: String,
    pub custom_field: Uint8Slice,
}

crate::sql_model! {
    impl TestModel {
        base:         { embed: BaseModel },
        name:         { tag: "column:name" },
        foobar:       { tag: "-" },
        custom_field: { tag: "column:custom_field", valuer: true },
    }
}

pub(crate) fn test_model(id: u64, create_time: u32, name: &str, custom: &[u8]) -> TestModel {
    TestModel {
        base: BaseModel { id, create_time },
        name: name.to_string(),
        foobar: "not persisted".to_string(),
        custom_field: Uint8Slice(custom.to_vec()),
    }
}

/// 总是失败的 valuer。
#[derive(Debug, Clone, Default)]
pub(crate) struct Broken;

impl SqlValuer for Broken {
    fn value(&self) -> Result<SqlValue, ValuerError> {
        Err(ValuerError::new("broken value"))
    }
}
