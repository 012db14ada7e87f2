//! Mocker：把 model 转成 mock 结果集，或生成对应的 INSERT 语句。

use crate::error::MockError;
use crate::extract::{
    ValuerText, columns_from_model_type, insert_columns_from_model_type, values_from_model,
};
use crate::flavor::Flavor;
use crate::model::SqlModel;
use crate::resolver::{SharedResolver, default_resolver};
use crate::rows::MockRows;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 可转换为 mock 行的输入：单个 model（`&T`、`&&T`、`&Box<T>`）或同类型 model 的序列。
pub trait ModelSource<'a, T: 'a> {
    /// 按输入顺序展开为 model 引用。
    fn models(self) -> Vec<&'a T>;
}

impl<'a, T: SqlModel + 'a> ModelSource<'a, T> for &'a T {
    fn models(self) -> Vec<&'a T> {
        vec![self]
    }
}

impl<'a, 'b: 'a, T: SqlModel + 'b> ModelSource<'a, T> for &'a &'b T {
    fn models(self) -> Vec<&'a T> {
        vec![*self]
    }
}

impl<'a, T: SqlModel + 'a> ModelSource<'a, T> for &'a Box<T> {
    fn models(self) -> Vec<&'a T> {
        vec![&**self]
    }
}

impl<'a, T: SqlModel + 'a> ModelSource<'a, T> for &'a [T] {
    fn models(self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, T: SqlModel + 'a, const N: usize> ModelSource<'a, T> for &'a [T; N] {
    fn models(self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, T: SqlModel + 'a> ModelSource<'a, T> for &'a Vec<T> {
    fn models(self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, 'b: 'a, T: SqlModel + 'b> ModelSource<'a, T> for &'a [&'b T] {
    fn models(self) -> Vec<&'a T> {
        self.iter().map(|m| &**m).collect()
    }
}

impl<'a, 'b: 'a, T: SqlModel + 'b> ModelSource<'a, T> for &'a Vec<&'b T> {
    fn models(self) -> Vec<&'a T> {
        self.iter().map(|m| &**m).collect()
    }
}

impl<'a, T: SqlModel + 'a> ModelSource<'a, T> for &'a [Box<T>] {
    fn models(self) -> Vec<&'a T> {
        self.iter().map(|b| &**b).collect()
    }
}

impl<'a, T: SqlModel + 'a> ModelSource<'a, T> for &'a Vec<Box<T>> {
    fn models(self) -> Vec<&'a T> {
        self.iter().map(|b| &**b).collect()
    }
}

/// 转换配置：列名 resolver、SQL 方言、valuer 文本归一方式、INSERT 是否保留主键列。
#[derive(Clone)]
pub struct Mocker {
    pub flavor: Flavor,
    resolver: SharedResolver,
    valuer_text: ValuerText,
    identity_on_insert: bool,
}

impl std::fmt::Debug for Mocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // resolver 无法 Debug
        f.debug_struct("Mocker")
            .field("flavor", &self.flavor)
            .field("valuer_text", &self.valuer_text)
            .field("identity_on_insert", &self.identity_on_insert)
            .finish()
    }
}

impl Default for Mocker {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            resolver: default_resolver(),
            valuer_text: ValuerText::default(),
            identity_on_insert: false,
        }
    }
}

impl Mocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回替换了 resolver 的副本，不修改原对象。
    pub fn with_resolver(&self, resolver: SharedResolver) -> Self {
        let mut c = self.clone();
        c.resolver = resolver;
        c
    }

    /// 返回替换了方言的副本，不修改原对象。
    pub fn for_flavor(&self, flavor: Flavor) -> Self {
        let mut c = self.clone();
        c.flavor = flavor;
        c
    }

    /// 返回替换了 valuer 文本归一方式的副本，不修改原对象。
    pub fn with_valuer_text(&self, valuer_text: ValuerText) -> Self {
        let mut c = self.clone();
        c.valuer_text = valuer_text;
        c
    }

    /// 返回副本：`true` 时 INSERT 保留主键/自增列，默认排除。
    pub fn with_identity_columns(&self, keep: bool) -> Self {
        let mut c = self.clone();
        c.identity_on_insert = keep;
        c
    }

    pub fn columns<T: SqlModel>(&self) -> Vec<String> {
        columns_from_model_type::<T>(self.resolver.as_ref())
    }

    pub fn values<T: SqlModel>(&self, model: &T) -> Result<Vec<SqlValue>, MockError> {
        values_from_model(model, self.resolver.as_ref(), self.valuer_text)
    }

    /// 列名只从类型推导一次，每个 model 按输入顺序生成一行。
    pub fn model_to_rows<'a, T, S>(&self, source: S) -> Result<MockRows, MockError>
    where
        T: SqlModel + 'a,
        S: ModelSource<'a, T>,
    {
        let mut rows = MockRows::new(self.columns::<T>());
        for model in source.models() {
            rows.try_add_row(self.values(model)?)?;
        }
        tracing::debug!(
            model = std::any::type_name::<T>(),
            columns = ?rows.columns(),
            rows = rows.len(),
            "built mock rows"
        );
        Ok(rows)
    }

    /// 生成 `INSERT INTO <table> (<cols>) VALUES (<placeholders>)`。
    pub fn insert_sql<T: SqlModel>(&self, table: &str) -> String {
        let columns = if self.identity_on_insert {
            self.columns::<T>()
        } else {
            insert_columns_from_model_type::<T>(self.resolver.as_ref())
        };

        let mut buf = StringBuilder::new();
        buf.write_str("INSERT INTO ");
        buf.write_str(&self.flavor.quote(table));
        buf.write_str(" (");
        let quoted: Vec<String> = columns.iter().map(|c| self.flavor.quote(c)).collect();
        buf.write_strings(&quoted, ",");
        buf.write_str(") VALUES (");
        let placeholders: Vec<String> = (1..=columns.len())
            .map(|i| self.flavor.placeholder(i))
            .collect();
        buf.write_strings(&placeholders, ",");
        buf.write_char(')');

        let sql = buf.into_string();
        tracing::debug!(model = std::any::type_name::<T>(), %sql, "built insert sql");
        sql
    }

    /// 与 `insert_sql` 相同，但转义了正则元字符，可直接用于按正则匹配 SQL 的 mock。
    pub fn insert_sql_pattern<T: SqlModel>(&self, table: &str) -> String {
        regex::escape(&self.insert_sql::<T>(table))
    }
}

/// 使用默认配置把单个 model 或 model 序列转成 mock 结果集。
pub fn model_to_rows<'a, T, S>(source: S) -> Result<MockRows, MockError>
where
    T: SqlModel + 'a,
    S: ModelSource<'a, T>,
{
    Mocker::default().model_to_rows(source)
}

/// 使用默认配置为 model 的类型生成 INSERT 语句（只用到类型，不读取字段值）。
pub fn insert_sql<'a, T, S>(_model: S, table: &str) -> String
where
    T: SqlModel + 'a,
    S: ModelSource<'a, T>,
{
    Mocker::default().insert_sql::<T>(table)
}

/// 使用默认配置生成转义后的 INSERT 语句正则。
pub fn insert_sql_pattern<'a, T, S>(_model: S, table: &str) -> String
where
    T: SqlModel + 'a,
    S: ModelSource<'a, T>,
{
    Mocker::default().insert_sql_pattern::<T>(table)
}
