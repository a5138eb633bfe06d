// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use hr_bulk_import::config::ImportConfigReader;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub max_rows: usize,
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub locale: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            max_rows: 100,
            max_file_size_bytes: 5 * 1024 * 1024,
            allowed_extensions: vec!["csv".to_string(), "xlsx".to_string(), "xls".to_string()],
            locale: "en".to_string(),
        }
    }
}

impl MockConfig {
    /// 小行数上限，便于构造越界文件
    pub fn with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows,
            ..Self::default()
        }
    }

    pub fn with_max_file_size(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }
}

impl ImportConfigReader for MockConfig {
    fn max_rows(&self) -> usize {
        self.max_rows
    }

    fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    fn allowed_extensions(&self) -> Vec<String> {
        self.allowed_extensions.clone()
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}
