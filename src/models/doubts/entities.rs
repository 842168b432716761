use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 疑问状态
//
// 数据库存大写字符串，保持与历史数据兼容。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/doubt.ts")]
pub enum DoubtStatus {
    Pending,  // 待回复
    Resolved, // 已解决
}

impl DoubtStatus {
    pub const PENDING: &'static str = "PENDING";
    pub const RESOLVED: &'static str = "RESOLVED";
}

impl<'de> Deserialize<'de> for DoubtStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            DoubtStatus::PENDING => Ok(DoubtStatus::Pending),
            DoubtStatus::RESOLVED => Ok(DoubtStatus::Resolved),
            _ => Err(serde::de::Error::custom(format!(
                "无效的疑问状态: '{s}'. 支持的状态: PENDING, RESOLVED"
            ))),
        }
    }
}

impl std::fmt::Display for DoubtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoubtStatus::Pending => write!(f, "{}", DoubtStatus::PENDING),
            DoubtStatus::Resolved => write!(f, "{}", DoubtStatus::RESOLVED),
        }
    }
}

impl std::str::FromStr for DoubtStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(DoubtStatus::Pending),
            "RESOLVED" => Ok(DoubtStatus::Resolved),
            _ => Err(format!("Invalid doubt status: {s}")),
        }
    }
}

// 学生疑问
//
// 可选关联题目或视频；被关联对象删除后外键置空，疑问保留。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/doubt.ts")]
pub struct Doubt {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub question_id: Option<i64>,
    pub video_id: Option<i64>,
    pub status: DoubtStatus,
    pub response: Option<String>,
    pub responded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_uppercase_round_trip() {
        assert_eq!(
            DoubtStatus::from_str("PENDING").unwrap(),
            DoubtStatus::Pending
        );
        assert_eq!(DoubtStatus::Resolved.to_string(), "RESOLVED");
        assert!(DoubtStatus::from_str("pending").is_err());
    }
}
