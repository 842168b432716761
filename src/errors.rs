//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_elearn_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ElearnError {
            $($variant(String),)*
        }

        impl ElearnError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ElearnError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ElearnError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ElearnError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ElearnError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ElearnError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_elearn_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    MetadataFetch("E012", "Metadata Fetch Error"),
}

impl ElearnError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ElearnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ElearnError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ElearnError {
    fn from(err: sea_orm::DbErr) -> Self {
        ElearnError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ElearnError {
    fn from(err: std::io::Error) -> Self {
        ElearnError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for ElearnError {
    fn from(err: serde_json::Error) -> Self {
        ElearnError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ElearnError {
    fn from(err: chrono::ParseError) -> Self {
        ElearnError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ElearnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ElearnError::cache_connection("test").code(), "E001");
        assert_eq!(ElearnError::database_config("test").code(), "E003");
        assert_eq!(ElearnError::validation("test").code(), "E006");
        assert_eq!(ElearnError::metadata_fetch("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ElearnError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            ElearnError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ElearnError::validation("Invalid correct answer index");
        assert_eq!(err.message(), "Invalid correct answer index");
    }

    #[test]
    fn test_format_simple() {
        let err = ElearnError::validation("Invalid YouTube URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid YouTube URL"));
    }
}
