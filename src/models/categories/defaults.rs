//! 内置默认分类
//!
//! platform_config 或 chapters 表为空时的回退值，首次读取时会写回数据库。

/// platform_config 中班级列表的键
pub const CONFIG_KEY_CLASSES: &str = "classes";
/// platform_config 中学科列表的键
pub const CONFIG_KEY_SUBJECTS: &str = "subjects";

pub const DEFAULT_CLASSES: &[&str] = &["7", "8", "9", "10", "11", "12", "JEE", "WBJEE"];

pub const DEFAULT_SUBJECTS: &[&str] = &["MATHEMATICS", "PHYSICS", "CHEMISTRY", "SCIENCE"];

/// 学生批次的合法取值（个人资料偏好）
pub const VALID_BATCHES: &[&str] = &["JEE", "WBJEE", "BOARDS"];

/// 指定学科的默认章节列表，未知学科返回空列表
pub fn default_chapters_for(subject: &str) -> Vec<String> {
    let chapters: &[&str] = match subject {
        "MATHEMATICS" => &[
            "Algebra",
            "Trigonometry",
            "Coordinate Geometry",
            "Calculus",
            "Vectors & 3D Geometry",
            "Probability & Statistics",
            "Sets & Relations",
            "Complex Numbers",
            "Matrices & Determinants",
            "Sequences & Series",
            "Permutations & Combinations",
            "Limits & Continuity",
            "Differential Equations",
            "Integral Calculus",
        ],
        "PHYSICS" => &[
            "Mechanics",
            "Kinematics",
            "Laws of Motion",
            "Work, Energy & Power",
            "Rotational Motion",
            "Gravitation",
            "Thermodynamics",
            "Waves & Oscillations",
            "Optics",
            "Electrostatics",
            "Current Electricity",
            "Magnetism",
            "Electromagnetic Induction",
            "Modern Physics",
            "Semiconductors",
        ],
        "CHEMISTRY" => &[
            "Atomic Structure",
            "Chemical Bonding",
            "States of Matter",
            "Thermodynamics",
            "Equilibrium",
            "Redox Reactions",
            "Electrochemistry",
            "Chemical Kinetics",
            "Organic Chemistry Basics",
            "Hydrocarbons",
            "Polymers",
            "Biomolecules",
            "Coordination Compounds",
            "Periodic Table",
        ],
        "SCIENCE" => &[
            "Motion",
            "Force & Laws of Motion",
            "Gravitation",
            "Work & Energy",
            "Sound",
            "Light",
            "Electricity",
            "Magnetism",
            "Chemical Reactions",
            "Acids, Bases & Salts",
            "Metals & Non-metals",
            "Carbon Compounds",
            "Life Processes",
            "Heredity & Evolution",
        ],
        _ => &[],
    };

    chapters.iter().map(|c| c.to_string()).collect()
}

pub fn default_classes() -> Vec<String> {
    DEFAULT_CLASSES.iter().map(|c| c.to_string()).collect()
}

pub fn default_subjects() -> Vec<String> {
    DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_subject_has_chapters() {
        for subject in DEFAULT_SUBJECTS {
            assert!(
                !default_chapters_for(subject).is_empty(),
                "no default chapters for {subject}"
            );
        }
    }

    #[test]
    fn test_unknown_subject_has_no_chapters() {
        assert!(default_chapters_for("BIOLOGY").is_empty());
    }

    #[test]
    fn test_default_lists_non_empty() {
        assert_eq!(default_classes().len(), 8);
        assert_eq!(default_subjects().len(), 4);
    }
}
