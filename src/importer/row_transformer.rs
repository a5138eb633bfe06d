// ==========================================
// 员工批量导入系统 - 行转换器
// ==========================================
// 职责: 将校验通过的行转换为 EmployeeDraft
// 红线: 只对 valid 行调用（由上传向导保证）
// 约定: 日期统一经宽松解析后以 YYYY-MM-DD 输出，无法解析则为空
// ==========================================

use crate::domain::employee::{
    BankInfo, ContractDraft, EmergencyContact, Education, EmployeeDraft, OnboardingStatus,
    Position, TaxInfo,
};
use crate::domain::types::{ContractType, EmployeeStatus, Gender};
use crate::domain::upload::{ColumnMapping, RawRow};
use crate::importer::data_cleaner::{parse_integer, parse_lenient_date};
use crate::importer::field_catalog::keys;

pub const DEFAULT_FTE: f64 = 1.0;

// ==========================================
// RowTransformer - 行转换器
// ==========================================
pub struct RowTransformer;

impl Default for RowTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl RowTransformer {
    pub fn new() -> Self {
        Self
    }

    /// 转换单行为员工草稿
    ///
    /// # 参数
    /// - row: 已通过校验的行
    /// - mapping: 字段 → 列名映射
    /// - positions: 职位列表（按名称解析 position_id / position_code）
    ///
    /// # 返回
    /// - EmployeeDraft: code 为空，由创建方分配
    pub fn transform_row(
        &self,
        row: &RawRow,
        mapping: &ColumnMapping,
        positions: &[Position],
    ) -> EmployeeDraft {
        let text = |key: &str| mapping.value_of(row, key).to_string();
        let date = |key: &str| parse_lenient_date(mapping.value_of(row, key));

        let full_name = text(keys::FULL_NAME);
        let (split_first, split_last) = split_full_name(&full_name);
        let first_name = non_empty_or(text(keys::FIRST_NAME), split_first);
        let last_name = non_empty_or(text(keys::LAST_NAME), split_last);

        let position_title = text(keys::POSITION_TITLE);
        let position = resolve_position(positions, &position_title);

        let degree = text(keys::EDUCATION_DEGREE);
        let education = if degree.is_empty() {
            Vec::new()
        } else {
            vec![Education {
                degree,
                institution: text(keys::EDUCATION_INSTITUTION),
                major: text(keys::EDUCATION_MAJOR),
            }]
        };

        EmployeeDraft {
            code: String::new(),
            status: EmployeeStatus::Pending,
            fte: DEFAULT_FTE,
            onboarding_status: OnboardingStatus::default(),

            employee_id: text(keys::EMPLOYEE_ID),
            company_email: text(keys::COMPANY_EMAIL),
            position_id: position.map(|p| p.id.clone()).unwrap_or_default(),
            position_code: position.map(|p| p.code.clone()).unwrap_or_default(),
            position_title,
            department: text(keys::DEPARTMENT),
            work_location: text(keys::WORK_LOCATION),
            manager_email: text(keys::MANAGER_EMAIL),
            company_join_date: date(keys::COMPANY_JOIN_DATE),
            official_start_date: date(keys::OFFICIAL_START_DATE),

            full_name,
            first_name,
            last_name,
            personal_email: text(keys::PERSONAL_EMAIL),
            phone_number: text(keys::PHONE_NUMBER),
            date_of_birth: date(keys::DATE_OF_BIRTH),
            gender: Gender::from_raw(mapping.value_of(row, keys::GENDER)),
            nationality: text(keys::NATIONALITY),
            national_id: text(keys::NATIONAL_ID),
            national_id_issue_date: date(keys::NATIONAL_ID_ISSUE_DATE),
            national_id_issue_place: text(keys::NATIONAL_ID_ISSUE_PLACE),
            permanent_address: text(keys::PERMANENT_ADDRESS),
            current_address: text(keys::CURRENT_ADDRESS),

            contract: ContractDraft {
                contract_number: text(keys::CONTRACT_NUMBER),
                contract_type: ContractType::from_raw(mapping.value_of(row, keys::CONTRACT_TYPE)),
                start_date: date(keys::CONTRACT_START_DATE),
                end_date: date(keys::CONTRACT_END_DATE),
                signed_date: date(keys::CONTRACT_SIGNED_DATE),
            },
            tax_info: TaxInfo {
                tax_code: text(keys::TAX_CODE),
                tax_dependents: parse_integer(mapping.value_of(row, keys::TAX_DEPENDENTS)),
                social_insurance_number: text(keys::SOCIAL_INSURANCE_NUMBER),
            },
            bank_info: BankInfo {
                bank_name: text(keys::BANK_NAME),
                account_number: text(keys::BANK_ACCOUNT_NUMBER),
                account_holder: text(keys::BANK_ACCOUNT_HOLDER),
            },
            emergency_contact: EmergencyContact {
                name: text(keys::EMERGENCY_CONTACT_NAME),
                relationship: text(keys::EMERGENCY_CONTACT_RELATIONSHIP),
                phone: text(keys::EMERGENCY_CONTACT_PHONE),
            },
            education,
        }
    }
}

/// 按第一个空格拆分全名: "Jane Mary Doe" → ("Jane", "Mary Doe")
fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.trim().split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (full_name.trim().to_string(), String::new()),
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// 职位名称精确匹配（不区分大小写）
fn resolve_position<'a>(positions: &'a [Position], title: &str) -> Option<&'a Position> {
    if title.is_empty() {
        return None;
    }
    let title = title.to_lowercase();
    positions.iter().find(|p| p.title.trim().to_lowercase() == title)
}
