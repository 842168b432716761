//! 对象缓存
//!
//! 通过注册表选择后端，内置 moka（内存）与 redis 两种实现。
//! 登录用户信息走这层缓存。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并自动注册一个缓存插件
///
/// 实现类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $constructor:ident) => {
        ::paste::paste! {
            #[::ctor::ctor]
            fn [<__register_object_cache_ $constructor:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            match $constructor::new() {
                                Ok(cache) => Ok(::std::boxed::Box::new(cache)
                                    as ::std::boxed::Box<dyn $crate::cache::ObjectCache>),
                                Err(e) => Err($crate::errors::ElearnError::cache_connection(e)),
                            }
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
