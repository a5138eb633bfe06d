// ==========================================
// 员工批量导入系统 - 数据清洗与格式判定
// ==========================================
// 职责: 宽松日期解析、邮箱与整数格式判定
// 校验器与转换器共用同一套解析规则
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

// 简单的 local@domain.tld 形式
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// D/M/YYYY 或 DD/MM/YYYY
static DAY_FIRST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("day-first pattern is a valid regex")
});

// 通用日期格式（按尝试顺序）
// 斜杠格式优先按月/日/年解释，与通用日期解析器一致；失败后才回退到日/月/年
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a, %d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// 宽松日期解析
///
/// # 规则
/// 1. RFC 3339 / ISO 8601 日期时间（取日期部分）
/// 2. 常见日期格式（ISO、YYYY/MM/DD、M/D/YYYY、英文月份名）
/// 3. 回退: D/M/YYYY 或 DD/MM/YYYY
///
/// # 返回
/// - Some(NaiveDate): 解析成功
/// - None: 空值或无法识别
pub fn parse_lenient_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt.date());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Some(date);
    }

    parse_day_first(value)
}

/// 显式 D/M/YYYY 回退解析
fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let caps = DAY_FIRST_PATTERN.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 是否为有效日期（宽松规则）
pub fn is_valid_date(value: &str) -> bool {
    parse_lenient_date(value).is_some()
}

/// 是否符合 local@domain.tld
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// 是否可解析为整数
pub fn is_integer(value: &str) -> bool {
    parse_integer(value).is_some()
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
