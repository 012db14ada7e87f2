//! MockRows：SQL mock 的结果集（列头 + 按顺序排列的行）。

use crate::value::SqlValue;

/// 结果集错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowsError {
    #[error("sqlmock expected {expected} values to match columns, got {got}")]
    ColumnCountMismatch { expected: usize, got: usize },
}

/// mock 结果集。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockRows {
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
}

impl MockRows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 追加一行（测试夹具写法，可链式调用）。
    ///
    /// # Panics
    ///
    /// 值的个数与列数不一致时 panic。需要错误返回时用 [`MockRows::try_add_row`]。
    pub fn add_row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        if let Err(e) = self.try_add_row(values) {
            panic!("{e}");
        }
        self
    }

    /// 追加一行；值的个数必须等于列数。
    pub fn try_add_row<I, V>(&mut self, values: I) -> Result<&mut Self, RowsError>
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        let row: Vec<SqlValue> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(RowsError::ColumnCountMismatch {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(self)
    }

    /// 批量追加多行，遇到第一行不合法时停止。
    pub fn add_rows<R, I, V>(&mut self, rows: R) -> Result<&mut Self, RowsError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        for row in rows {
            self.try_add_row(row)?;
        }
        Ok(self)
    }

    /// 从 CSV 文本构造行：每个非空行一条记录，单元格按 `,` 切分并去掉首尾空白。
    ///
    /// `NULL`（不区分大小写）转为 `SqlValue::Null`，其余单元格转为字节。
    pub fn from_csv<I, S>(columns: I, csv: &str) -> Result<Self, RowsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = Self::new(columns);
        for line in csv.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let cells = line.split(',').map(|cell| {
                let cell = cell.trim();
                if cell.eq_ignore_ascii_case("null") {
                    SqlValue::Null
                } else {
                    SqlValue::Bytes(cell.as_bytes().to_vec())
                }
            });
            rows.try_add_row(cells)?;
        }
        Ok(rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<SqlValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<SqlValue>> {
        self.rows.iter()
    }

    /// 第 `row` 行、名为 `column` 的单元格。
    pub fn get(&self, row: usize, column: &str) -> Option<&SqlValue> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

impl<'a> IntoIterator for &'a MockRows {
    type Item = &'a Vec<SqlValue>;
    type IntoIter = std::slice::Iter<'a, Vec<SqlValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
