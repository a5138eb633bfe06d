// ==========================================
// 员工批量导入系统 - 导入报告渲染
// ==========================================
// 职责: 将映射状态 / 预览报告 / 创建汇总渲染为纯文本
// 说明: 标题与提示语经 i18n 本地化；行级校验消息保持原文
// ==========================================

use crate::api::import_api::{ImportSummary, ReviewReport};
use crate::domain::upload::{ColumnMapping, MappingValidation};
use crate::i18n::{t, t_with_args};
use crate::importer::field_catalog::field_catalog;
use std::fmt::Write;

/// 渲染映射表（目录顺序，含未映射字段与多余列）
///
/// # 参数
/// - mapping: 当前映射
/// - validation: 映射校验结果
/// - unmapped_columns: 未被引用的文件列
pub fn render_mapping(
    mapping: &ColumnMapping,
    validation: &MappingValidation,
    unmapped_columns: &[String],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", t("report.mapping_title"));

    let not_mapped = t("report.not_mapped");
    for field in field_catalog() {
        let marker = if field.required { "*" } else { " " };
        let header = mapping.header_for(field.key).unwrap_or(not_mapped.as_str());
        let _ = writeln!(out, "{} {:<32} <- {}", marker, field.label, header);
    }

    if !unmapped_columns.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            t_with_args(
                "report.unmapped_columns",
                &[("columns", unmapped_columns.join(", ").as_str())]
            )
        );
    }

    for label in &validation.missing_fields {
        let _ = writeln!(
            out,
            "! {}",
            t_with_args("report.missing_field", &[("field", label.as_str())])
        );
    }
    for duplicate in &validation.duplicate_columns {
        let _ = writeln!(
            out,
            "! {}",
            t_with_args(
                "report.duplicate_column",
                &[
                    ("column", duplicate.column.as_str()),
                    ("fields", duplicate.fields.join(", ").as_str()),
                ]
            )
        );
    }

    out
}

/// 渲染逐行预览
pub fn render_review(report: &ReviewReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", t("report.review_title"));
    if let Some(file_name) = &report.file_name {
        let _ = writeln!(out, "{}", t_with_args("report.file", &[("name", file_name.as_str())]));
    }

    let ok = t("report.row_valid");
    let failed = t("report.row_invalid");
    for row in &report.rows {
        let verdict = if row.valid { &ok } else { &failed };
        let check = if row.selected { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "{} #{:<4} {:<8} {} {}",
            check, row.row_number, verdict, row.employee_id, row.full_name
        );
        for error in &row.errors {
            let _ = writeln!(out, "        - {}", error);
        }
    }

    let _ = writeln!(
        out,
        "{}",
        t_with_args(
            "report.counts",
            &[
                ("total", report.total_rows.to_string().as_str()),
                ("valid", report.valid_rows.to_string().as_str()),
                ("invalid", report.invalid_rows.to_string().as_str()),
                ("selected", report.selected_rows.to_string().as_str()),
            ]
        )
    );
    out
}

/// 渲染创建汇总
pub fn render_summary(summary: &ImportSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", t("report.summary_title"));
    let _ = writeln!(
        out,
        "{}",
        t_with_args("report.created", &[("count", summary.created.len().to_string().as_str())])
    );
    for employee in &summary.created {
        let _ = writeln!(
            out,
            "  {} {} {}",
            employee.code, employee.employee_id, employee.full_name
        );
    }
    out
}
