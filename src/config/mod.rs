// ==========================================
// 员工批量导入系统 - 配置层
// ==========================================
// 职责: 导入限制与界面语言配置
// 存储: JSON 文件，缺省时使用内置默认值
// ==========================================

pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置管理器
pub use config_manager::{default_config_path, ConfigError, ConfigManager, ImportConfig};
pub use import_config_trait::ImportConfigReader;
