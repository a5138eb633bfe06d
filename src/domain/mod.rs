// ==========================================
// 员工批量导入系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、导入中间结构
// 红线: 不含解析逻辑,不含校验逻辑
// ==========================================

pub mod employee;
pub mod types;
pub mod upload;

// 重导出核心类型
pub use employee::{
    BankInfo, ContractDraft, Education, EmergencyContact, Employee, EmployeeContract,
    EmployeeDraft, OnboardingStatus, Position, TaxInfo,
};
pub use types::{ContractType, EmployeeStatus, FieldGroup, FieldType, Gender};
pub use upload::{
    ColumnMapping, DuplicateColumn, MappingValidation, RawRow, TabularFile, ValidationError,
    ValidationResult,
};
