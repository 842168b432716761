use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 平台配置表 ====================
        // key -> JSON 字符串数组（"classes" / "subjects"）
        manager
            .create_table(
                Table::create()
                    .table(PlatformConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlatformConfig::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlatformConfig::Value).text().not_null())
                    .col(
                        ColumnDef::new(PlatformConfig::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 章节表 ====================
        // subject 按名称关联，不是外键：分类可以整体替换而不迁移既有内容
        manager
            .create_table(
                Table::create()
                    .table(Chapters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chapters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chapters::Name).string().not_null())
                    .col(ColumnDef::new(Chapters::Subject).string().not_null())
                    .col(ColumnDef::new(Chapters::ClassLevel).string().null())
                    .col(ColumnDef::new(Chapters::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chapters_subject")
                    .table(Chapters::Table)
                    .col(Chapters::Subject)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlatformConfig::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlatformConfig {
    #[sea_orm(iden = "platform_config")]
    Table,
    Key,
    Value,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Chapters {
    #[sea_orm(iden = "chapters")]
    Table,
    Id,
    Name,
    Subject,
    ClassLevel,
    CreatedAt,
}
