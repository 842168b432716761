//! 预导入模块，方便使用

pub use super::chapters::{
    ActiveModel as ChapterActiveModel, Entity as Chapters, Model as ChapterModel,
};
pub use super::doubts::{ActiveModel as DoubtActiveModel, Entity as Doubts, Model as DoubtModel};
pub use super::platform_config::{
    ActiveModel as PlatformConfigActiveModel, Entity as PlatformConfig,
    Model as PlatformConfigModel,
};
pub use super::question_attempts::{
    ActiveModel as QuestionAttemptActiveModel, Entity as QuestionAttempts,
    Model as QuestionAttemptModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::video_progress::{
    ActiveModel as VideoProgressActiveModel, Entity as VideoProgress, Model as VideoProgressModel,
};
pub use super::videos::{ActiveModel as VideoActiveModel, Entity as Videos, Model as VideoModel};
