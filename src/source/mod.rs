//! 输入源模块：Makefile文件读取
pub mod loader;

// 导出核心接口
pub use self::loader::{MakefileLoader, MakefileSource};
