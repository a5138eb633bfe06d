// ==========================================
// 员工批量导入系统 - 内存员工存储
// ==========================================
// 职责: EmployeeCreator 的内存实现（模拟应用状态）
// 约定: code = "EMP" + 4 位序号（按全部员工数递增），id = UUID v4
//       新建员工追加到列表末尾，后续导入视其为既有员工
// ==========================================

use crate::domain::employee::{Employee, EmployeeDraft};
use crate::importer::importer_trait::EmployeeCreator;
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

pub const EMPLOYEE_CODE_PREFIX: &str = "EMP";

pub struct InMemoryEmployeeStore {
    employees: Mutex<Vec<Employee>>,
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InMemoryEmployeeStore {
    /// 以既有员工初始化
    pub fn new(existing: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(existing),
        }
    }

    /// 当前全部员工快照
    pub fn snapshot(&self) -> anyhow::Result<Vec<Employee>> {
        let guard = self
            .employees
            .lock()
            .map_err(|_| anyhow!("employee store lock poisoned"))?;
        Ok(guard.clone())
    }

    pub fn len(&self) -> usize {
        self.employees.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 生成员工编码: EMP0001, EMP0002, ...
pub fn employee_code(sequence: usize) -> String {
    format!("{}{:04}", EMPLOYEE_CODE_PREFIX, sequence)
}

#[async_trait]
impl EmployeeCreator for InMemoryEmployeeStore {
    async fn create_employees(&self, drafts: Vec<EmployeeDraft>) -> anyhow::Result<Vec<Employee>> {
        let mut guard = self
            .employees
            .lock()
            .map_err(|_| anyhow!("employee store lock poisoned"))?;

        let mut created = Vec::with_capacity(drafts.len());
        for mut draft in drafts {
            let code = employee_code(guard.len() + 1);
            draft.code = code.clone();
            let employee = Employee::from_draft(&draft, Uuid::new_v4().to_string(), code);
            guard.push(employee.clone());
            created.push(employee);
        }

        info!(created = created.len(), total = guard.len(), "员工创建完成");
        Ok(created)
    }
}
