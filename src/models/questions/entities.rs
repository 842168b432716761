use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 题目难度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub enum Difficulty {
    Easy,   // 简单
    Medium, // 中等
    Hard,   // 困难
}

impl Difficulty {
    pub const EASY: &'static str = "easy";
    pub const MEDIUM: &'static str = "medium";
    pub const HARD: &'static str = "hard";
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Difficulty::EASY => Ok(Difficulty::Easy),
            Difficulty::MEDIUM => Ok(Difficulty::Medium),
            Difficulty::HARD => Ok(Difficulty::Hard),
            _ => Err(serde::de::Error::custom(format!(
                "无效的难度: '{s}'. 支持的难度: easy, medium, hard"
            ))),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "{}", Difficulty::EASY),
            Difficulty::Medium => write!(f, "{}", Difficulty::MEDIUM),
            Difficulty::Hard => write!(f, "{}", Difficulty::HARD),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

// 选择题实体
//
// 题干与解析可包含 LaTeX 片段（$...$ 或 $$...$$），
// correct_answer 是 options 的下标。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub question_image: Option<String>,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: Option<String>,
    pub class_level: String,
    pub subject: String,
    pub chapter: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Question {
    // 学生视图：隐藏答案与解析
    pub fn redacted(mut self) -> Self {
        self.correct_answer = -1;
        self.explanation = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_round_trip() {
        assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert!(Difficulty::from_str("extreme").is_err());
    }

    #[test]
    fn test_default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_redacted_hides_answer() {
        let q = Question {
            id: 1,
            question_text: "What is $2+2$?".to_string(),
            question_image: None,
            options: vec!["3".to_string(), "4".to_string()],
            correct_answer: 1,
            explanation: Some("Basic arithmetic".to_string()),
            class_level: "7".to_string(),
            subject: "MATHEMATICS".to_string(),
            chapter: "Algebra".to_string(),
            topic: "Addition".to_string(),
            difficulty: Difficulty::Easy,
            created_by: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let redacted = q.redacted();
        assert_eq!(redacted.correct_answer, -1);
        assert!(redacted.explanation.is_none());
    }
}
