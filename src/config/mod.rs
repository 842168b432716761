//! 应用配置
//!
//! 配置来源优先级：config.{env} 文件 > config 文件 > 环境变量覆盖。

mod r#impl;
mod structs;

pub use structs::*;
