// ==========================================
// 员工批量导入系统 - 导入接口 Trait
// ==========================================
// 职责: 定义文件解析与员工创建的接口（不包含实现）
// ==========================================

use crate::domain::employee::{Employee, EmployeeDraft};
use crate::domain::upload::TabularFile;
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 字节内容 → 统一表格（阶段 0）
// 实现者: CsvParser, ExcelParser
// 说明: 行数上限/空文件判定由 UniversalFileParser 统一处理
pub trait FileParser: Send + Sync {
    /// 解析文件内容为表格（表头 + 字符串行记录）
    ///
    /// # 参数
    /// - bytes: 已读取的文件内容
    ///
    /// # 返回
    /// - Ok(TabularFile): 解析结果（尚未做行数校验）
    /// - Err: 语法错误、工作簿无工作表等
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<TabularFile>;
}

// ==========================================
// EmployeeCreator Trait
// ==========================================
// 用途: 接收用户确认后的草稿并创建员工（外部协作方）
// 实现者: InMemoryEmployeeStore
// 说明: 导入管道本身从不调用此接口，由上传向导在最后一步调用
#[async_trait]
pub trait EmployeeCreator: Send + Sync {
    /// 批量创建员工
    ///
    /// # 参数
    /// - drafts: 已通过校验且被用户选中的草稿
    ///
    /// # 返回
    /// - Ok(Vec<Employee>): 已创建的员工（含分配后的 code / id）
    /// - Err: 创建失败
    async fn create_employees(&self, drafts: Vec<EmployeeDraft>) -> anyhow::Result<Vec<Employee>>;
}
