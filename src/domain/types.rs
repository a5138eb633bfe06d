// ==========================================
// 员工批量导入系统 - 领域类型定义
// ==========================================
// 职责: 字段目录枚举、员工枚举值及其原始值归一化
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 字段类型 (Field Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,   // 自由文本
    Email,  // 邮箱
    Date,   // 日期（宽松解析）
    Select, // 枚举值
    Number, // 数字
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Email => write!(f, "email"),
            FieldType::Date => write!(f, "date"),
            FieldType::Select => write!(f, "select"),
            FieldType::Number => write!(f, "number"),
        }
    }
}

// ==========================================
// 字段分组 (Field Group)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Work,     // 工作信息
    Personal, // 个人信息
    Contract, // 合同信息
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldGroup::Work => write!(f, "work"),
            FieldGroup::Personal => write!(f, "personal"),
            FieldGroup::Contract => write!(f, "contract"),
        }
    }
}

// ==========================================
// 性别 (Gender)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// 校验阶段允许的原始取值（不区分大小写）
    pub const ACCEPTED_VALUES: [&'static str; 5] = ["male", "female", "other", "m", "f"];

    /// 归一化原始取值
    ///
    /// - male / m → Male
    /// - female / f → Female
    /// - other → Other
    /// - 其他 → None
    pub fn from_raw(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

// ==========================================
// 合同类型 (Contract Type)
// ==========================================
// 只接受四个规范值的完整写法，不接受缩写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl ContractType {
    pub const ALL: [ContractType; 4] = [
        ContractType::FullTime,
        ContractType::PartTime,
        ContractType::Contract,
        ContractType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::FullTime => "full-time",
            ContractType::PartTime => "part-time",
            ContractType::Contract => "contract",
            ContractType::Internship => "internship",
        }
    }

    /// 归一化原始取值（不区分大小写，精确匹配）
    pub fn from_raw(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 员工状态 (Employee Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Pending, // 导入后待入职
    Active,
    Inactive,
    Terminated,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeStatus::Pending => write!(f, "pending"),
            EmployeeStatus::Active => write!(f, "active"),
            EmployeeStatus::Inactive => write!(f, "inactive"),
            EmployeeStatus::Terminated => write!(f, "terminated"),
        }
    }
}
