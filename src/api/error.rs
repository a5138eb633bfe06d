// ==========================================
// 员工批量导入系统 - API层错误类型
// ==========================================
// 职责: 定义上传向导错误类型，包装导入模块的文件级错误
// 说明: 行级校验问题不是错误，通过 ValidationResult 返回
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 文件级错误（来自导入模块）
    // ==========================================
    #[error(transparent)]
    Import(#[from] ImportError),

    // ==========================================
    // 向导流程错误
    // ==========================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid step transition: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    #[error(
        "Column mapping is incomplete: missing fields {missing_fields:?}, shared columns {duplicate_columns:?}"
    )]
    MappingIncomplete {
        missing_fields: Vec<String>,
        duplicate_columns: Vec<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    // ==========================================
    // 协作方错误
    // ==========================================
    #[error("Employee creation failed: {0}")]
    CreationFailed(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为文件级错误（用户需要重新上传）
    pub fn is_file_error(&self) -> bool {
        matches!(self, ApiError::Import(_))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_conversion() {
        let api_err: ApiError = ImportError::EmptyFile.into();
        assert!(api_err.is_file_error());
        assert_eq!(api_err.to_string(), "File contains no data rows");
    }

    #[test]
    fn test_mapping_incomplete_message() {
        let err = ApiError::MappingIncomplete {
            missing_fields: vec!["Full Name".to_string()],
            duplicate_columns: vec![],
        };
        assert!(!err.is_file_error());
        assert!(err.to_string().contains("Full Name"));
    }
}
