// ==========================================
// 员工批量导入系统 - 冲突处理器实现
// ==========================================
// 职责: 检测同文件内重复 / 与既有员工重复
// 覆盖字段: employeeId（区分大小写）、companyEmail（不区分大小写）、
//           contractNumber（区分大小写，比对既有员工的全部合同）
// ==========================================

use crate::domain::employee::Employee;
use crate::domain::upload::RawRow;

pub struct ConflictHandler;

impl ConflictHandler {
    /// 检测同文件内重复
    ///
    /// 行身份按结构比较（内容完全相同的另一行视为同一行），不按下标
    ///
    /// # 参数
    /// - row: 当前行
    /// - all_rows: 文件全部行
    /// - header: 该字段映射的列名
    /// - value: 当前行取值（已 TRIM，非空）
    /// - case_insensitive: 是否忽略大小写
    pub fn is_duplicated_in_file(
        &self,
        row: &RawRow,
        all_rows: &[RawRow],
        header: &str,
        value: &str,
        case_insensitive: bool,
    ) -> bool {
        all_rows
            .iter()
            .filter(|other| *other != row)
            .filter_map(|other| other.get(header))
            .map(|other_value| other_value.trim())
            .any(|other_value| same_value(other_value, value, case_insensitive))
    }

    /// 员工编号是否已存在（区分大小写）
    pub fn employee_id_exists(&self, existing: &[Employee], value: &str) -> bool {
        existing.iter().any(|e| e.employee_id.trim() == value)
    }

    /// 公司邮箱是否已存在（不区分大小写）
    pub fn company_email_exists(&self, existing: &[Employee], value: &str) -> bool {
        existing
            .iter()
            .any(|e| same_value(e.company_email.trim(), value, true))
    }

    /// 合同号是否已存在于任一既有员工的合同中
    pub fn contract_number_exists(&self, existing: &[Employee], value: &str) -> bool {
        existing
            .iter()
            .flat_map(|e| e.contracts.iter())
            .any(|c| c.contract_number.trim() == value)
    }
}

fn same_value(a: &str, b: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        a.to_lowercase() == b.to_lowercase()
    } else {
        a == b
    }
}
