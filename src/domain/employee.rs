// ==========================================
// 员工批量导入系统 - 员工领域模型
// ==========================================
// 职责: 既有员工/职位快照（只读协作方）与导入草稿结构
// 红线: 草稿只由行转换器生成，且只针对校验通过的行
// ==========================================

use crate::domain::types::{ContractType, EmployeeStatus, Gender};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Position - 职位
// ==========================================
// 用途: 行转换时按职位名称解析 position_id / position_code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
}

// ==========================================
// EmployeeContract - 员工合同
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeContract {
    pub contract_number: String,
    #[serde(default)]
    pub contract_type: Option<ContractType>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

// ==========================================
// Employee - 既有员工记录
// ==========================================
// 用途: 唯一性校验的比对基准（employeeId / companyEmail / 合同号）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub code: String,
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub company_email: String,
    #[serde(default)]
    pub position_id: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub contracts: Vec<EmployeeContract>,
}

// ==========================================
// EmployeeDraft - 导入草稿
// ==========================================
// 生命周期: 行转换器生成 → 用户确认 → 交给员工创建协作方
// 日期字段序列化为 YYYY-MM-DD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    // ===== 簿记字段 =====
    pub code: String, // 创建时由调用方分配
    pub status: EmployeeStatus,
    pub fte: f64,
    pub onboarding_status: OnboardingStatus,

    // ===== 工作信息 =====
    pub employee_id: String,
    pub company_email: String,
    pub position_title: String,
    pub position_id: String,
    pub position_code: String,
    pub department: String,
    pub work_location: String,
    pub manager_email: String,
    pub company_join_date: Option<NaiveDate>,
    pub official_start_date: Option<NaiveDate>,

    // ===== 个人信息 =====
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub personal_email: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub nationality: String,
    pub national_id: String,
    pub national_id_issue_date: Option<NaiveDate>,
    pub national_id_issue_place: String,
    pub permanent_address: String,
    pub current_address: String,

    // ===== 嵌套记录 =====
    pub contract: ContractDraft,
    pub tax_info: TaxInfo,
    pub bank_info: BankInfo,
    pub emergency_contact: EmergencyContact,
    pub education: Vec<Education>,
}

/// 初始合同（每行恰好一条）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    pub contract_number: String,
    pub contract_type: Option<ContractType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub signed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInfo {
    pub tax_code: String,
    pub tax_dependents: Option<i64>,
    pub social_insurance_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub major: String,
}

/// 入职进度（导入时全部为 false）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub email_sent: bool,
    pub account_activated: bool,
    pub profile_completed: bool,
}

impl Employee {
    /// 由已确认的草稿生成员工记录（code / id 由创建方分配）
    pub fn from_draft(draft: &EmployeeDraft, id: String, code: String) -> Self {
        Self {
            id,
            code,
            employee_id: draft.employee_id.clone(),
            full_name: draft.full_name.clone(),
            company_email: draft.company_email.clone(),
            position_id: draft.position_id.clone(),
            status: draft.status,
            contracts: vec![EmployeeContract {
                contract_number: draft.contract.contract_number.clone(),
                contract_type: draft.contract.contract_type,
                start_date: draft.contract.start_date,
                end_date: draft.contract.end_date,
            }],
        }
    }
}
