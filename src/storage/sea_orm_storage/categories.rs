//! 分类存储操作
//!
//! classes / subjects 存在 platform_config 键值行，chapters 单独成表。

use super::SeaOrmStorage;
use crate::entity::chapters::{
    ActiveModel as ChapterActiveModel, Column as ChapterColumn, Entity as Chapters,
};
use crate::entity::platform_config::{
    ActiveModel as ConfigActiveModel, Entity as PlatformConfig,
};
use crate::errors::{ElearnError, Result};
use crate::models::categories::entities::Chapter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 读取 platform_config 中的列表值
    pub async fn get_platform_config_impl(&self, key: &str) -> Result<Option<Vec<String>>> {
        let result = PlatformConfig::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询平台配置失败: {e}")))?;

        Ok(result.map(|m| m.into_values()))
    }

    /// 写入 platform_config 中的列表值（存在则覆盖）
    pub async fn set_platform_config_impl(&self, key: &str, values: Vec<String>) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let value = serde_json::to_string(&values)
            .map_err(|e| ElearnError::serialization(format!("序列化配置值失败: {e}")))?;

        let existing = PlatformConfig::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询平台配置失败: {e}")))?;

        match existing {
            Some(_) => {
                let model = ConfigActiveModel {
                    key: Set(key.to_string()),
                    value: Set(value),
                    updated_at: Set(now),
                };
                model.update(&self.db).await.map_err(|e| {
                    ElearnError::database_operation(format!("更新平台配置失败: {e}"))
                })?;
            }
            None => {
                let model = ConfigActiveModel {
                    key: Set(key.to_string()),
                    value: Set(value),
                    updated_at: Set(now),
                };
                model.insert(&self.db).await.map_err(|e| {
                    ElearnError::database_operation(format!("写入平台配置失败: {e}"))
                })?;
            }
        }

        Ok(())
    }

    /// 列出全部章节（按学科、名称排序）
    pub async fn list_chapters_impl(&self) -> Result<Vec<Chapter>> {
        let result = Chapters::find()
            .order_by_asc(ChapterColumn::Subject)
            .order_by_asc(ChapterColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询章节失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_chapter()).collect())
    }

    /// 整体替换某学科的章节列表
    ///
    /// 删除该学科全部旧章节后批量插入新章节，两步在一个事务中完成。
    pub async fn replace_chapters_impl(
        &self,
        subject: &str,
        names: Vec<String>,
    ) -> Result<Vec<Chapter>> {
        let now = chrono::Utc::now().timestamp();
        let subject_owned = subject.to_string();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ElearnError::database_operation(format!("开启事务失败: {e}")))?;

        Chapters::delete_many()
            .filter(ChapterColumn::Subject.eq(subject_owned.clone()))
            .exec(&txn)
            .await
            .map_err(|e| ElearnError::database_operation(format!("删除旧章节失败: {e}")))?;

        if !names.is_empty() {
            let models: Vec<ChapterActiveModel> = names
                .iter()
                .map(|name| ChapterActiveModel {
                    name: Set(name.clone()),
                    subject: Set(subject_owned.clone()),
                    class_level: Set(None),
                    created_at: Set(now),
                    ..Default::default()
                })
                .collect();

            Chapters::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| ElearnError::database_operation(format!("插入章节失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| ElearnError::database_operation(format!("提交事务失败: {e}")))?;

        let result = Chapters::find()
            .filter(ChapterColumn::Subject.eq(subject_owned))
            .order_by_asc(ChapterColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询章节失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_chapter()).collect())
    }
}
