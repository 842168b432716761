use serde::Deserialize;
use ts_rs::TS;

// 分类层级
#[derive(Debug, Clone, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/categories.ts")]
pub enum CategoryKind {
    Classes,
    Subjects,
    Chapters,
}

impl CategoryKind {
    pub const CLASSES: &'static str = "classes";
    pub const SUBJECTS: &'static str = "subjects";
    pub const CHAPTERS: &'static str = "chapters";
}

impl<'de> Deserialize<'de> for CategoryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CategoryKind::CLASSES => Ok(CategoryKind::Classes),
            CategoryKind::SUBJECTS => Ok(CategoryKind::Subjects),
            CategoryKind::CHAPTERS => Ok(CategoryKind::Chapters),
            _ => Err(serde::de::Error::custom(format!(
                "无效的分类层级: '{s}'. 支持: classes, subjects, chapters"
            ))),
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::Classes => write!(f, "{}", CategoryKind::CLASSES),
            CategoryKind::Subjects => write!(f, "{}", CategoryKind::SUBJECTS),
            CategoryKind::Chapters => write!(f, "{}", CategoryKind::CHAPTERS),
        }
    }
}

// 更新分类请求
//
// kind == chapters 时必须指定 subject，values 整体替换该学科的章节列表。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/categories.ts")]
pub struct UpdateCategoryRequest {
    pub kind: CategoryKind,
    pub values: Vec<String>,
    pub subject: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_deserialization() {
        let req: UpdateCategoryRequest =
            serde_json::from_str(r#"{"kind": "chapters", "values": ["Algebra"], "subject": "MATHEMATICS"}"#)
                .unwrap();
        assert_eq!(req.kind, CategoryKind::Chapters);
        assert_eq!(req.subject.as_deref(), Some("MATHEMATICS"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<UpdateCategoryRequest, _> =
            serde_json::from_str(r#"{"kind": "topics", "values": []}"#);
        assert!(result.is_err());
    }
}
