//! SQL Flavor（方言）：控制标识符引号与占位符样式。

/// SQL 方言枚举。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    CQL,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
    Doris,
}

impl Flavor {
    /// 为标识符加引号。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::MySQL | Self::ClickHouse | Self::Doris => format!("`{name}`"),
            Self::PostgreSQL
            | Self::SQLServer
            | Self::SQLite
            | Self::Presto
            | Self::Oracle
            | Self::Informix => {
                format!("\"{name}\"")
            }
            Self::CQL => format!("'{name}'"),
        }
    }

    /// 第 `index` 个参数（从 1 开始）的占位符。
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Self::MySQL
            | Self::SQLite
            | Self::CQL
            | Self::ClickHouse
            | Self::Presto
            | Self::Informix
            | Self::Doris => "?".to_string(),
            Self::PostgreSQL => format!("${index}"),
            Self::SQLServer => format!("@p{index}"),
            Self::Oracle => format!(":{index}"),
        }
    }
}
