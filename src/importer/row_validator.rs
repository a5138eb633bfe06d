// ==========================================
// 员工批量导入系统 - 行校验器实现
// ==========================================
// 职责: 逐行应用字段业务规则（必填/格式/唯一性），累积全部违规
// 规则表: 字段键 → 规则列表；不短路，一行可产生多条错误
// 约定: 未映射字段在每一行都取空字符串
//       空值只对必填字段构成错误（由 Required 规则报告，格式规则跳过空值）
// ==========================================

use crate::domain::employee::Employee;
use crate::domain::types::Gender;
use crate::domain::upload::{ColumnMapping, RawRow, TabularFile, ValidationError, ValidationResult};
use crate::importer::conflict_handler::ConflictHandler;
use crate::importer::data_cleaner::{is_integer, is_valid_date, is_valid_email};
use crate::importer::field_catalog::{keys, label_of};
use tracing::{debug, info};

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

const CONTRACT_TYPE_VALUES: [&str; 4] = ["full-time", "part-time", "contract", "internship"];

// ==========================================
// 单条规则
// ==========================================
#[derive(Debug, Clone, Copy)]
enum Rule {
    Required,
    Email,
    Date,
    OneOf(&'static [&'static str]),
    Integer,
    Unique(Uniqueness),
}

#[derive(Debug, Clone, Copy)]
enum Uniqueness {
    EmployeeId,     // 区分大小写
    CompanyEmail,   // 不区分大小写
    ContractNumber, // 比对全部既有合同
}

// ==========================================
// 规则表
// ==========================================
static ROW_RULES: &[(&str, &[Rule])] = &[
    (keys::EMPLOYEE_ID, &[Rule::Required, Rule::Unique(Uniqueness::EmployeeId)]),
    (
        keys::COMPANY_EMAIL,
        &[Rule::Required, Rule::Email, Rule::Unique(Uniqueness::CompanyEmail)],
    ),
    (keys::POSITION_TITLE, &[Rule::Required]),
    (keys::COMPANY_JOIN_DATE, &[Rule::Required, Rule::Date]),
    (keys::OFFICIAL_START_DATE, &[Rule::Required, Rule::Date]),
    (keys::FULL_NAME, &[Rule::Required]),
    (
        keys::CONTRACT_NUMBER,
        &[Rule::Required, Rule::Unique(Uniqueness::ContractNumber)],
    ),
    (
        keys::CONTRACT_TYPE,
        &[Rule::Required, Rule::OneOf(&CONTRACT_TYPE_VALUES)],
    ),
    (keys::CONTRACT_START_DATE, &[Rule::Required, Rule::Date]),
    (keys::CONTRACT_END_DATE, &[Rule::Required, Rule::Date]),
    (keys::PERSONAL_EMAIL, &[Rule::Email]),
    (keys::DATE_OF_BIRTH, &[Rule::Date]),
    (keys::NATIONAL_ID_ISSUE_DATE, &[Rule::Date]),
    (keys::GENDER, &[Rule::OneOf(&Gender::ACCEPTED_VALUES)]),
    (keys::TAX_DEPENDENTS, &[Rule::Integer]),
];

// ==========================================
// RowValidator - 行校验器
// ==========================================
pub struct RowValidator {
    conflict_handler: ConflictHandler,
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowValidator {
    pub fn new() -> Self {
        Self {
            conflict_handler: ConflictHandler,
        }
    }

    /// 校验单行
    ///
    /// # 参数
    /// - row: 当前行
    /// - mapping: 字段 → 列名映射（可为空映射）
    /// - existing_employees: 既有员工快照（唯一性比对）
    /// - all_rows: 文件全部行（文件内唯一性比对）
    ///
    /// # 返回
    /// - ValidationResult: valid 当且仅当 errors 为空
    pub fn validate_row(
        &self,
        row: &RawRow,
        mapping: &ColumnMapping,
        existing_employees: &[Employee],
        all_rows: &[RawRow],
    ) -> ValidationResult {
        let mut errors = Vec::new();

        for (key, rules) in ROW_RULES {
            let value = mapping.value_of(row, key);
            let label = label_of(key);

            if value.is_empty() {
                if rules.iter().any(|r| matches!(r, Rule::Required)) {
                    errors.push(ValidationError::new(*key, format!("{} is required", label)));
                }
                continue;
            }

            for rule in rules.iter() {
                let messages =
                    self.check(*rule, key, label, value, row, mapping, existing_employees, all_rows);
                errors.extend(messages.into_iter().map(|m| ValidationError::new(*key, m)));
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// 校验整个文件（每行都给出结论）
    pub fn validate_rows(
        &self,
        table: &TabularFile,
        mapping: &ColumnMapping,
        existing_employees: &[Employee],
    ) -> Vec<ValidationResult> {
        let results: Vec<ValidationResult> = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let result = self.validate_row(row, mapping, existing_employees, &table.rows);
                if !result.valid {
                    debug!(row_number = idx + 1, errors = result.errors.len(), "行校验未通过");
                }
                result
            })
            .collect();

        let valid = results.iter().filter(|r| r.valid).count();
        info!(total = results.len(), valid, invalid = results.len() - valid, "行校验完成");
        results
    }

    /// 应用单条非必填规则，返回全部违规消息
    ///
    /// 唯一性规则可同时产生"文件内重复"与"已存在"两条消息
    #[allow(clippy::too_many_arguments)]
    fn check(
        &self,
        rule: Rule,
        key: &str,
        label: &str,
        value: &str,
        row: &RawRow,
        mapping: &ColumnMapping,
        existing_employees: &[Employee],
        all_rows: &[RawRow],
    ) -> Vec<String> {
        let single = match rule {
            Rule::Required => None,
            Rule::Email => (!is_valid_email(value)).then(|| INVALID_EMAIL_MESSAGE.to_string()),
            Rule::Date => {
                (!is_valid_date(value)).then(|| format!("Invalid date format for {}", label))
            }
            Rule::Integer => (!is_integer(value)).then(|| format!("{} must be a whole number", label)),
            Rule::OneOf(allowed) => {
                let lowered = value.to_lowercase();
                (!allowed.contains(&lowered.as_str()))
                    .then(|| format!("{} must be one of: {}", label, allowed.join(", ")))
            }
            Rule::Unique(kind) => {
                return self.check_unique(
                    kind,
                    key,
                    label,
                    value,
                    row,
                    mapping,
                    existing_employees,
                    all_rows,
                );
            }
        };
        single.into_iter().collect()
    }

    /// 唯一性规则：文件内重复与既有记录冲突分别报告
    #[allow(clippy::too_many_arguments)]
    fn check_unique(
        &self,
        kind: Uniqueness,
        key: &str,
        label: &str,
        value: &str,
        row: &RawRow,
        mapping: &ColumnMapping,
        existing_employees: &[Employee],
        all_rows: &[RawRow],
    ) -> Vec<String> {
        let mut messages = Vec::new();
        let Some(header) = mapping.header_for(key) else {
            return messages;
        };
        let case_insensitive = matches!(kind, Uniqueness::CompanyEmail);

        if self
            .conflict_handler
            .is_duplicated_in_file(row, all_rows, header, value, case_insensitive)
        {
            messages.push(format!("{} is duplicated in CSV", label));
        }

        let exists = match kind {
            Uniqueness::EmployeeId => self
                .conflict_handler
                .employee_id_exists(existing_employees, value),
            Uniqueness::CompanyEmail => self
                .conflict_handler
                .company_email_exists(existing_employees, value),
            Uniqueness::ContractNumber => self
                .conflict_handler
                .contract_number_exists(existing_employees, value),
        };
        if exists {
            messages.push(format!("{} already exists", label));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::EmployeeContract;
    use crate::domain::types::{ContractType, EmployeeStatus};
    use crate::importer::field_catalog::required_fields;

    fn full_mapping() -> ColumnMapping {
        crate::importer::field_catalog::field_catalog()
            .iter()
            .map(|f| (f.key.to_string(), f.label.to_string()))
            .collect()
    }

    fn valid_row(employee_id: &str, email: &str, contract: &str) -> RawRow {
        [
            ("Employee ID", employee_id),
            ("Company Email", email),
            ("Position", "Software Engineer"),
            ("Company Join Date", "2024-01-15"),
            ("Official Start Date", "2024-03-15"),
            ("Full Name", "Jane Doe"),
            ("Contract Number", contract),
            ("Contract Type", "Full-Time"),
            ("Contract Start Date", "15/01/2024"),
            ("Contract End Date", "2025-01-14"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn existing_with_contract(contract_number: &str) -> Vec<Employee> {
        vec![Employee {
            id: "e1".to_string(),
            code: "EMP0001".to_string(),
            employee_id: "EMP-OLD".to_string(),
            full_name: "Old Timer".to_string(),
            company_email: "old@acme.com".to_string(),
            position_id: "p1".to_string(),
            status: EmployeeStatus::Active,
            contracts: vec![EmployeeContract {
                contract_number: contract_number.to_string(),
                contract_type: Some(ContractType::FullTime),
                start_date: None,
                end_date: None,
            }],
        }]
    }

    fn messages_for(result: &ValidationResult, field: &str) -> Vec<String> {
        result
            .errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.clone())
            .collect()
    }

    #[test]
    fn test_valid_row_passes() {
        let row = valid_row("EMP-1", "jane@acme.com", "C-1");
        let result = RowValidator::new().validate_row(&row, &full_mapping(), &[], &[row.clone()]);
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_invalid_email() {
        let row = valid_row("EMP-1", "not-an-email", "C-1");
        let result = RowValidator::new().validate_row(&row, &full_mapping(), &[], &[row.clone()]);

        assert!(!result.valid);
        assert!(result
            .errors
            .contains(&ValidationError::new(keys::COMPANY_EMAIL, "Invalid email format")));
    }

    #[test]
    fn test_empty_mapping_reports_every_required_field() {
        let row = valid_row("EMP-1", "jane@acme.com", "C-1");
        let result =
            RowValidator::new().validate_row(&row, &ColumnMapping::new(), &[], &[row.clone()]);

        assert!(!result.valid);
        for field in required_fields() {
            assert_eq!(
                messages_for(&result, field.key),
                vec![format!("{} is required", field.label)]
            );
        }
    }

    #[test]
    fn test_accumulates_multiple_errors() {
        let mut row = valid_row("EMP-1", "bad", "C-1");
        row.insert("Contract Type".to_string(), "freelance".to_string());
        row.insert("Official Start Date".to_string(), "someday".to_string());
        row.insert("Gender".to_string(), "x".to_string());
        row.insert("Tax Dependents".to_string(), "two".to_string());

        let result = RowValidator::new().validate_row(&row, &full_mapping(), &[], &[row.clone()]);

        assert_eq!(result.errors.len(), 5);
        assert!(result.has_error_for(keys::CONTRACT_TYPE));
        assert!(result.has_error_for(keys::OFFICIAL_START_DATE));
        assert!(result.has_error_for(keys::GENDER));
        assert!(result.has_error_for(keys::TAX_DEPENDENTS));
    }

    #[test]
    fn test_optional_fields_empty_is_fine_but_format_checked_when_present() {
        let mut row = valid_row("EMP-1", "jane@acme.com", "C-1");
        row.insert("Personal Email".to_string(), "".to_string());
        row.insert("Date of Birth".to_string(), "".to_string());
        let result = RowValidator::new().validate_row(&row, &full_mapping(), &[], &[row.clone()]);
        assert!(result.valid);

        row.insert("Personal Email".to_string(), "jane(at)home".to_string());
        row.insert("Date of Birth".to_string(), "31/02/1990".to_string());
        row.insert("Gender".to_string(), "F".to_string());
        let result = RowValidator::new().validate_row(&row, &full_mapping(), &[], &[row.clone()]);
        assert_eq!(
            messages_for(&result, keys::PERSONAL_EMAIL),
            vec!["Invalid email format".to_string()]
        );
        assert!(result.has_error_for(keys::DATE_OF_BIRTH));
        assert!(!result.has_error_for(keys::GENDER));
    }

    #[test]
    fn test_duplicate_employee_id_flags_both_rows() {
        let a = valid_row("EMP-1", "a@acme.com", "C-1");
        let b = valid_row("EMP-1", "b@acme.com", "C-2");
        let all = vec![a.clone(), b.clone()];
        let validator = RowValidator::new();

        for row in [&a, &b] {
            let result = validator.validate_row(row, &full_mapping(), &[], &all);
            assert_eq!(
                messages_for(&result, keys::EMPLOYEE_ID),
                vec!["Employee ID is duplicated in CSV".to_string()]
            );
        }
    }

    #[test]
    fn test_employee_id_uniqueness_is_case_sensitive() {
        let a = valid_row("EMP-1", "a@acme.com", "C-1");
        let b = valid_row("emp-1", "b@acme.com", "C-2");
        let all = vec![a.clone(), b];

        let result = RowValidator::new().validate_row(&a, &full_mapping(), &[], &all);

        assert!(result.valid);
    }

    #[test]
    fn test_duplicate_email_is_case_insensitive() {
        let a = valid_row("EMP-1", "Jane@Acme.com", "C-1");
        let b = valid_row("EMP-2", "jane@acme.COM", "C-2");
        let all = vec![a.clone(), b.clone()];
        let validator = RowValidator::new();

        for row in [&a, &b] {
            let result = validator.validate_row(row, &full_mapping(), &[], &all);
            assert_eq!(
                messages_for(&result, keys::COMPANY_EMAIL),
                vec!["Company Email is duplicated in CSV".to_string()]
            );
        }
    }

    #[test]
    fn test_duplicate_contract_number_in_file() {
        let a = valid_row("EMP-1", "a@acme.com", "C-7");
        let b = valid_row("EMP-2", "b@acme.com", "C-7");
        let all = vec![a.clone(), b.clone()];
        let validator = RowValidator::new();

        for row in [&a, &b] {
            let result = validator.validate_row(row, &full_mapping(), &[], &all);
            assert_eq!(
                messages_for(&result, keys::CONTRACT_NUMBER),
                vec!["Contract Number is duplicated in CSV".to_string()]
            );
        }
    }

    #[test]
    fn test_duplicated_in_file_and_existing_reports_both() {
        let a = valid_row("EMP-OLD", "old@acme.com", "C-100");
        let b = valid_row("EMP-OLD", "OLD@acme.com", "C-100");
        let all = vec![a.clone(), b];
        let existing = existing_with_contract("C-100");

        let result = RowValidator::new().validate_row(&a, &full_mapping(), &existing, &all);

        assert_eq!(
            messages_for(&result, keys::EMPLOYEE_ID),
            vec![
                "Employee ID is duplicated in CSV".to_string(),
                "Employee ID already exists".to_string(),
            ]
        );
        assert_eq!(
            messages_for(&result, keys::COMPANY_EMAIL),
            vec![
                "Company Email is duplicated in CSV".to_string(),
                "Company Email already exists".to_string(),
            ]
        );
        assert_eq!(
            messages_for(&result, keys::CONTRACT_NUMBER),
            vec![
                "Contract Number is duplicated in CSV".to_string(),
                "Contract Number already exists".to_string(),
            ]
        );
    }

    #[test]
    fn test_existing_contract_number() {
        let row = valid_row("EMP-1", "jane@acme.com", "C-100");
        let existing = existing_with_contract("C-100");

        let result =
            RowValidator::new().validate_row(&row, &full_mapping(), &existing, &[row.clone()]);

        assert_eq!(
            messages_for(&result, keys::CONTRACT_NUMBER),
            vec!["Contract Number already exists".to_string()]
        );
    }

    #[test]
    fn test_existing_employee_id_and_email() {
        let row = valid_row("EMP-OLD", "OLD@acme.com", "C-1");
        let existing = existing_with_contract("C-100");

        let result =
            RowValidator::new().validate_row(&row, &full_mapping(), &existing, &[row.clone()]);

        assert_eq!(
            messages_for(&result, keys::EMPLOYEE_ID),
            vec!["Employee ID already exists".to_string()]
        );
        assert_eq!(
            messages_for(&result, keys::COMPANY_EMAIL),
            vec!["Company Email already exists".to_string()]
        );
    }
}
