//! Column resolver：把字段元数据解析为列名（或排除该字段）。

use crate::model::FieldMeta;
use std::sync::Arc;

/// 可替换的列名解析策略。
pub trait ColumnResolver {
    /// 返回字段对应的列名；`None` 或空串表示该字段不参与输出。
    fn column(&self, field: &FieldMeta) -> Option<String>;

    /// 字段是否为主键/自增列（生成 INSERT 时可排除）。
    fn is_identity(&self, _field: &FieldMeta) -> bool {
        false
    }
}

impl<F> ColumnResolver for F
where
    F: Fn(&FieldMeta) -> Option<String>,
{
    fn column(&self, field: &FieldMeta) -> Option<String> {
        self(field)
    }
}

/// 共享的 resolver 句柄。
pub type SharedResolver = Arc<dyn ColumnResolver + Send + Sync + 'static>;

/// 默认 resolver：`TagResolver::default()`。
pub fn default_resolver() -> SharedResolver {
    Arc::new(TagResolver::default())
}

pub const DEFAULT_TAG_DELIMITER: char = ';';

const COLUMN_PREFIX: &str = "column:";
const IDENTITY_FLAGS: &[&str] = &["primary", "primarykey", "primary_key", "autoincrement"];

/// 按分隔符切分 tag，去掉首尾空白与空段。
pub fn tag_segments(tag: &str, delimiter: char) -> impl Iterator<Item = &str> {
    tag.split(delimiter).map(str::trim).filter(|s| !s.is_empty())
}

/// 取 tag 中第一个 `column:<name>` 段的列名。
pub fn column_from_tag(tag: &str, delimiter: char) -> Option<&str> {
    tag_segments(tag, delimiter)
        .find_map(|seg| seg.strip_prefix(COLUMN_PREFIX))
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

fn is_identity_segment(seg: &str) -> bool {
    let (flag, enabled) = match seg.split_once(':') {
        Some((flag, v)) => (flag.trim(), !v.trim().eq_ignore_ascii_case("false")),
        None => (seg, true),
    };
    enabled && IDENTITY_FLAGS.iter().any(|f| flag.eq_ignore_ascii_case(f))
}

/// 解析 `column:<name>` 形式的 tag。
///
/// - 分隔符默认 `;`（`column:id;primaryKey`），可用 `with_delimiter(',')` 切换
/// - 没有 `column:` 段（包括 `-`）的字段被排除
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagResolver {
    delimiter: char,
}

impl Default for TagResolver {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_TAG_DELIMITER,
        }
    }
}

impl TagResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl ColumnResolver for TagResolver {
    fn column(&self, field: &FieldMeta) -> Option<String> {
        column_from_tag(field.tag, self.delimiter).map(str::to_string)
    }

    fn is_identity(&self, field: &FieldMeta) -> bool {
        tag_segments(field.tag, self.delimiter).any(is_identity_segment)
    }
}

/// 按命名规则推导列名：`column:` 段优先，`-` 排除，否则把原始字段名转为 snake_case。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnakeCaseResolver {
    tags: TagResolver,
}

impl SnakeCaseResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColumnResolver for SnakeCaseResolver {
    fn column(&self, field: &FieldMeta) -> Option<String> {
        if field.tag.trim() == "-" {
            return None;
        }
        self.tags
            .column(field)
            .or_else(|| Some(snake_case(field.orig)))
    }

    fn is_identity(&self, field: &FieldMeta) -> bool {
        self.tags.is_identity(field)
    }
}

/// 将 `CamelCase` 转为 `snake_case`：大写转小写，在 `aB`/`a1B`/`ABc` 等单词边界插入 `_`。
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut prev: Option<char> = None;
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();

        if c.is_ascii_uppercase() {
            if let Some(p) = prev {
                let prev_is_lower_or_digit = p.is_ascii_lowercase() || p.is_ascii_digit();
                let prev_is_upper = p.is_ascii_uppercase();
                let next_is_lower = next.map(|n| n.is_ascii_lowercase()).unwrap_or(false);

                if prev_is_lower_or_digit || (prev_is_upper && next_is_lower) {
                    out.push('_');
                }
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }

        prev = Some(c);
    }

    out
}
