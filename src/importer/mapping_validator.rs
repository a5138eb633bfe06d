// ==========================================
// 员工批量导入系统 - 映射校验器
// ==========================================
// 职责: 检测必填字段缺失、必填字段共用同一列
// 调用时机: 每次映射编辑后（决定向导能否进入下一步）
// 已知限制: 只检查必填字段之间的共用，可选字段共用不报告
// ==========================================

use crate::domain::upload::{ColumnMapping, DuplicateColumn, MappingValidation};
use crate::importer::field_catalog::required_fields;

pub struct MappingValidator;

impl MappingValidator {
    /// 校验映射
    ///
    /// # 返回
    /// - missing_fields: 未映射的必填字段标签（目录顺序）
    /// - duplicate_columns: 被多个必填字段引用的列（按首次出现顺序）
    pub fn validate_mapping(&self, mapping: &ColumnMapping) -> MappingValidation {
        let missing_fields: Vec<String> = required_fields()
            .filter(|field| !mapping.contains_key(field.key))
            .map(|field| field.label.to_string())
            .collect();

        // 列名 → 引用它的必填字段标签
        let mut claims: Vec<(String, Vec<String>)> = Vec::new();
        for field in required_fields() {
            let Some(header) = mapping.header_for(field.key) else {
                continue;
            };
            match claims.iter_mut().find(|(column, _)| column == header) {
                Some((_, labels)) => labels.push(field.label.to_string()),
                None => claims.push((header.to_string(), vec![field.label.to_string()])),
            }
        }

        let duplicate_columns: Vec<DuplicateColumn> = claims
            .into_iter()
            .filter(|(_, fields)| fields.len() > 1)
            .map(|(column, fields)| DuplicateColumn { column, fields })
            .collect();

        MappingValidation {
            valid: missing_fields.is_empty() && duplicate_columns.is_empty(),
            missing_fields,
            duplicate_columns,
        }
    }
}
