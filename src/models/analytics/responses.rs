use serde::Serialize;
use ts_rs::TS;

// 平台概览统计
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct PlatformOverview {
    pub total_students: u64,
    pub total_videos: u64,
    pub total_questions: u64,
    pub total_attempts: u64,
    pub correct_attempts: u64,
    pub overall_accuracy: u32, // 百分比，四舍五入
    pub videos_watched: u64,
    pub pending_doubts: u64,
    pub resolved_doubts: u64,
}

// 近七日活动
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct RecentActivity {
    pub new_students: u64,
    pub attempts: u64,
    pub videos_watched: u64,
}

// 按维度分组的计数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct DistributionEntry {
    pub key: String,
    pub count: u64,
}

// 答对数排行条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TopPerformer {
    pub user_id: i64,
    pub username: String,
    pub profile_name: String,
    pub correct_answers: u64,
}

// 管理端分析页完整响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct PlatformAnalytics {
    pub overview: PlatformOverview,
    pub recent_activity: RecentActivity,
    pub videos_by_class: Vec<DistributionEntry>,
    pub videos_by_subject: Vec<DistributionEntry>,
    pub questions_by_class: Vec<DistributionEntry>,
    pub questions_by_subject: Vec<DistributionEntry>,
    pub questions_by_difficulty: Vec<DistributionEntry>,
    pub top_performers: Vec<TopPerformer>,
}

// 学生个人学习统计
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct StudentStats {
    pub total_videos: u64,
    pub videos_watched: u64,
    pub total_questions: u64,
    pub questions_solved: u64,
    pub correct_answers: u64,
    pub accuracy: u32, // 百分比，四舍五入
    pub pending_doubts: u64,
}

impl StudentStats {
    // accuracy = round(correct / solved * 100)，无答题记录时为 0
    pub fn compute_accuracy(correct: u64, solved: u64) -> u32 {
        if solved == 0 {
            return 0;
        }
        ((correct as f64 / solved as f64) * 100.0).round() as u32
    }
}

// 管理端学生列表条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct StudentWithStats {
    pub user: crate::models::users::entities::User,
    pub questions_attempted: u64,
    pub correct_answers: u64,
    pub accuracy: u32,
    pub videos_watched: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(StudentStats::compute_accuracy(0, 0), 0);
        assert_eq!(StudentStats::compute_accuracy(1, 3), 33);
        assert_eq!(StudentStats::compute_accuracy(2, 3), 67);
        assert_eq!(StudentStats::compute_accuracy(5, 5), 100);
    }
}
