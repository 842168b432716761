//! 平台配置实体
//!
//! 键值行，目前存放班级列表与学科列表（JSON 数组字符串）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "platform_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    // value 字段按 JSON 数组解析，坏数据返回空列表
    pub fn into_values(self) -> Vec<String> {
        serde_json::from_str(&self.value).unwrap_or_default()
    }
}
