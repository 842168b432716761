pub mod responses;

pub use responses::{
    DistributionEntry, PlatformAnalytics, PlatformOverview, RecentActivity, StudentStats,
    StudentWithStats, TopPerformer,
};
