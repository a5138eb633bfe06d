// ==========================================
// 员工批量导入系统 - 字段自动映射器
// ==========================================
// 职责: 上传列名 → 标准字段的启发式匹配
// 规则: 按目录顺序逐字段匹配，先精确后部分，先到先得
// 说明: 同一列可能被多个字段命中（由映射校验器报告），用户可在界面上手动修正
// ==========================================

use crate::domain::upload::ColumnMapping;
use crate::importer::field_catalog::{field_catalog, FieldDefinition};
use tracing::debug;

pub struct FieldMapper;

impl FieldMapper {
    /// 自动映射
    ///
    /// # 参数
    /// - headers: 文件列名（文件顺序）
    ///
    /// # 返回
    /// - ColumnMapping: 字段键 → 列名；未命中的字段不出现
    pub fn auto_map<S: AsRef<str>>(&self, headers: &[S]) -> ColumnMapping {
        let normalized: Vec<(String, &str)> = headers
            .iter()
            .map(|h| (normalize(h.as_ref()), h.as_ref()))
            .collect();

        let mut mapping = ColumnMapping::new();
        for field in field_catalog() {
            if let Some(header) = Self::match_field(field, &normalized) {
                debug!(field = field.key, header, "字段自动映射");
                mapping.set(field.key, header);
            }
        }
        mapping
    }

    /// 单字段匹配: 精确匹配优先，其次部分匹配
    fn match_field<'h>(
        field: &FieldDefinition,
        headers: &[(String, &'h str)],
    ) -> Option<&'h str> {
        let aliases: Vec<String> = field.aliases.iter().map(|a| normalize(a)).collect();

        let exact = headers
            .iter()
            .find(|(norm, _)| aliases.iter().any(|alias| alias == norm));
        if let Some((_, header)) = exact {
            return Some(*header);
        }

        // 空白列名不参与部分匹配（空串是任何别名的子串）
        headers
            .iter()
            .filter(|(norm, _)| !norm.is_empty())
            .find(|(norm, _)| {
                aliases
                    .iter()
                    .any(|alias| norm.contains(alias.as_str()) || alias.contains(norm.as_str()))
            })
            .map(|(_, header)| *header)
    }

    /// 未被任何字段引用的列
    pub fn unmapped_columns<S: AsRef<str>>(
        &self,
        headers: &[S],
        mapping: &ColumnMapping,
    ) -> Vec<String> {
        headers
            .iter()
            .map(|h| h.as_ref())
            .filter(|h| !mapping.uses_header(h))
            .map(str::to_string)
            .collect()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
