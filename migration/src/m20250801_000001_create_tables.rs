use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::PreferredClassLevel).string().null())
                    .col(ColumnDef::new(Users::PreferredBatch).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建视频表
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Videos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Videos::YoutubeUrl).string().not_null())
                    .col(ColumnDef::new(Videos::YoutubeId).string().not_null())
                    .col(ColumnDef::new(Videos::Title).string().not_null())
                    .col(ColumnDef::new(Videos::Thumbnail).string().not_null())
                    .col(ColumnDef::new(Videos::Description).text().null())
                    .col(ColumnDef::new(Videos::ClassLevel).string().not_null())
                    .col(ColumnDef::new(Videos::Subject).string().not_null())
                    .col(ColumnDef::new(Videos::Chapter).string().null())
                    .col(ColumnDef::new(Videos::Topic).string().null())
                    .col(ColumnDef::new(Videos::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Videos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Videos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Videos::Table, Videos::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题库表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::ClassLevel).string().not_null())
                    .col(ColumnDef::new(Questions::Subject).string().not_null())
                    .col(ColumnDef::new(Questions::Chapter).string().not_null())
                    .col(ColumnDef::new(Questions::Topic).string().not_null())
                    .col(ColumnDef::new(Questions::QuestionText).text().not_null())
                    .col(ColumnDef::new(Questions::QuestionImage).string().null())
                    .col(ColumnDef::new(Questions::Options).text().not_null())
                    .col(
                        ColumnDef::new(Questions::CorrectAnswer)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::Difficulty).string().not_null())
                    .col(ColumnDef::new(Questions::Explanation).text().null())
                    .col(
                        ColumnDef::new(Questions::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建答题记录表
        manager
            .create_table(
                Table::create()
                    .table(QuestionAttempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionAttempts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QuestionAttempts::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionAttempts::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionAttempts::SelectedAnswer)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionAttempts::IsCorrect)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionAttempts::TimeTaken)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(QuestionAttempts::AttemptedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionAttempts::Table, QuestionAttempts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionAttempts::Table, QuestionAttempts::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建视频进度表
        manager
            .create_table(
                Table::create()
                    .table(VideoProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VideoProgress::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::VideoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::WatchedDuration)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::LastWatchedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VideoProgress::Table, VideoProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VideoProgress::Table, VideoProgress::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建疑问表
        manager
            .create_table(
                Table::create()
                    .table(Doubts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Doubts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Doubts::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Doubts::QuestionId).big_integer().null())
                    .col(ColumnDef::new(Doubts::VideoId).big_integer().null())
                    .col(ColumnDef::new(Doubts::Title).string().not_null())
                    .col(ColumnDef::new(Doubts::Description).text().not_null())
                    .col(ColumnDef::new(Doubts::Status).string().not_null())
                    .col(ColumnDef::new(Doubts::Response).text().null())
                    .col(ColumnDef::new(Doubts::RespondedAt).big_integer().null())
                    .col(ColumnDef::new(Doubts::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Doubts::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Doubts::Table, Doubts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Doubts::Table, Doubts::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Doubts::Table, Doubts::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doubts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VideoProgress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionAttempts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    PreferredClassLevel,
    PreferredBatch,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Videos {
    #[sea_orm(iden = "videos")]
    Table,
    Id,
    YoutubeUrl,
    YoutubeId,
    Title,
    Thumbnail,
    Description,
    ClassLevel,
    Subject,
    Chapter,
    Topic,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    ClassLevel,
    Subject,
    Chapter,
    Topic,
    QuestionText,
    QuestionImage,
    Options,
    CorrectAnswer,
    Difficulty,
    Explanation,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuestionAttempts {
    #[sea_orm(iden = "question_attempts")]
    Table,
    Id,
    UserId,
    QuestionId,
    SelectedAnswer,
    IsCorrect,
    TimeTaken,
    AttemptedAt,
}

#[derive(DeriveIden)]
enum VideoProgress {
    #[sea_orm(iden = "video_progress")]
    Table,
    Id,
    UserId,
    VideoId,
    WatchedDuration,
    Completed,
    LastWatchedAt,
}

#[derive(DeriveIden)]
enum Doubts {
    #[sea_orm(iden = "doubts")]
    Table,
    Id,
    UserId,
    QuestionId,
    VideoId,
    Title,
    Description,
    Status,
    Response,
    RespondedAt,
    CreatedAt,
    UpdatedAt,
}
