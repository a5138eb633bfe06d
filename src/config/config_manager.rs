// ==========================================
// 员工批量导入系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询
// 存储: JSON 文件（显式路径或 <config_dir>/hr-bulk-import/config.json）
// 约定: 文件不存在时使用默认值；文件存在但格式错误时报错
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::importer::file_parser::{DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_MAX_ROWS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_DIR_NAME: &str = "hr-bulk-import";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportConfig {
    pub max_rows: usize,
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub locale: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: vec!["csv".to_string(), "xlsx".to_string(), "xls".to_string()],
            locale: "en".to_string(),
        }
    }
}

impl ImportConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::InvalidValue("maxRows must be positive".to_string()));
        }
        if self.max_file_size_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "maxFileSizeBytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: ImportConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 由内存配置创建（测试 / 嵌入场景）
    pub fn from_config(config: ImportConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 从默认位置加载
    ///
    /// # 返回
    /// - 默认位置无配置文件或无法确定配置目录时返回默认配置
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                debug!("无法确定配置目录，使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 从指定路径加载，文件不存在时使用默认配置
    ///
    /// # 参数
    /// - path: JSON 配置文件路径
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// 从指定路径加载（文件必须存在）
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path_str.clone(),
            source,
        })?;
        let config: ImportConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path_str.clone(),
                source,
            })?;
        config.validate()?;

        info!(path = %path_str, max_rows = config.max_rows, "配置加载完成");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// 默认配置文件路径: <config_dir>/hr-bulk-import/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl ImportConfigReader for ConfigManager {
    fn max_rows(&self) -> usize {
        self.config.max_rows
    }

    fn max_file_size_bytes(&self) -> u64 {
        self.config.max_file_size_bytes
    }

    fn allowed_extensions(&self) -> Vec<String> {
        self.config.allowed_extensions.clone()
    }

    fn locale(&self) -> String {
        self.config.locale.clone()
    }
}
