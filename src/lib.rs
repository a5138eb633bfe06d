// ==========================================
// 员工批量导入系统 - 核心库
// ==========================================
// 流程: 文件解析 → 字段自动映射 → 映射校验 → 行校验 → 草稿生成
// 系统定位: 单用户、内存内的批量导入（人工确认后才创建员工）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 解析/映射/校验/转换
pub mod importer;

// 配置层 - 导入限制
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 上传向导
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ContractType, EmployeeStatus, FieldGroup, FieldType, Gender};

// 领域实体
pub use domain::{
    ColumnMapping, Employee, EmployeeDraft, MappingValidation, Position, RawRow, TabularFile,
    ValidationError, ValidationResult,
};

// 导入组件
pub use importer::{
    EmployeeCreator, FieldMapper, ImportError, InMemoryEmployeeStore, MappingValidator,
    RowTransformer, RowValidator, UniversalFileParser,
};

// API
pub use api::{ApiError, BulkUploadApi, ImportSummary, WizardStep};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Employee Bulk Import";
