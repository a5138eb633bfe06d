// ==========================================
// 员工批量导入系统 - 导入中间结构
// ==========================================
// 职责: 解析结果、列映射、校验结果
// 生命周期: 仅在一次上传向导流程内
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 原始行记录（列名 → 单元格字符串）
pub type RawRow = HashMap<String, String>;

// ==========================================
// TabularFile - 解析后的表格
// ==========================================
// 红线: 解析成功时 rows.len() ∈ [1, max_rows]
// 表头保持文件顺序，重复列名不去重
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularFile {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl TabularFile {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ==========================================
// ColumnMapping - 字段 → 列名映射
// ==========================================
// 每个字段至多对应一列；同一列可被多个字段引用（由映射校验器报告）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping(BTreeMap<String, String>);

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置映射，返回该字段原先对应的列
    pub fn set(&mut self, key: impl Into<String>, header: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), header.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn header_for(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// 是否有任一字段引用了该列（精确字符串比较）
    pub fn uses_header(&self, header: &str) -> bool {
        self.0.values().any(|h| h == header)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 取某字段在某行中的取值（已 TRIM）
    ///
    /// 字段未映射或单元格缺失时返回空字符串
    pub fn value_of<'a>(&self, row: &'a RawRow, key: &str) -> &'a str {
        self.header_for(key)
            .and_then(|header| row.get(header))
            .map(|v| v.trim())
            .unwrap_or("")
    }
}

impl FromIterator<(String, String)> for ColumnMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ==========================================
// 映射校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateColumn {
    pub column: String,
    pub fields: Vec<String>, // 必填字段标签
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingValidation {
    pub valid: bool,
    pub missing_fields: Vec<String>, // 必填字段标签
    pub duplicate_columns: Vec<DuplicateColumn>,
}

// ==========================================
// 行校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String, // FieldDefinition.key
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 单行校验结果，valid 当且仅当 errors 为空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}
