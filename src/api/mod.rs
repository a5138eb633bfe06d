// ==========================================
// 员工批量导入系统 - API 层
// ==========================================
// 职责: 提供上传向导接口与报告渲染，供命令行/界面调用
// ==========================================

pub mod error;
pub mod import_api;
pub mod report;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use import_api::{BulkUploadApi, ImportSummary, ReviewReport, RowReport, RowReview, WizardStep};
