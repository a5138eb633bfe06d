// ==========================================
// 员工批量导入系统 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入流程所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 上传向导/解析器读取限制参数
// 实现者: ConfigManager（JSON 文件 + 默认值）
pub trait ImportConfigReader: Send + Sync {
    /// 单文件最大数据行数
    ///
    /// # 默认值
    /// - 100
    fn max_rows(&self) -> usize;

    /// 单文件最大字节数
    ///
    /// # 默认值
    /// - 5 MiB (5 * 1024 * 1024)
    fn max_file_size_bytes(&self) -> u64;

    /// 允许的扩展名（小写，不含点）
    ///
    /// # 默认值
    /// - ["csv", "xlsx", "xls"]
    fn allowed_extensions(&self) -> Vec<String>;

    /// 界面语言
    ///
    /// # 默认值
    /// - "en"
    fn locale(&self) -> String;

    /// 扩展名是否被允许（不区分大小写）
    fn is_extension_allowed(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.').to_lowercase();
        self.allowed_extensions().iter().any(|e| e.to_lowercase() == ext)
    }
}
