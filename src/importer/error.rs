// ==========================================
// 员工批量导入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 文件级致命错误（中断整个导入流程，用户重新上传即可恢复）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0} (only .csv, .xlsx and .xls are accepted)")]
    UnsupportedFormat(String),

    #[error("File is too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Failed to read file: {0}")]
    FileReadError(String),

    // ===== 解析错误 =====
    #[error("Failed to parse CSV: {0}")]
    CsvParse(String),

    #[error("Failed to parse spreadsheet: {0}")]
    ExcelParse(String),

    #[error("Spreadsheet contains no sheets")]
    NoSheets,

    // ===== 行数约束 =====
    #[error("File contains {rows} data rows; at most {limit} rows can be imported at once")]
    TooManyRows { rows: usize, limit: usize },

    #[error("File contains no data rows")]
    EmptyFile,

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::FileReadError(err.to_string()),
        }
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParse(err.to_string())
    }
}

// 实现 From<calamine::XlsError>
impl From<calamine::XlsError> for ImportError {
    fn from(err: calamine::XlsError) -> Self {
        ImportError::ExcelParse(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
