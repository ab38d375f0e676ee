//! mkhelp - Makefile文档注释提取与帮助输出工具

// 导出全局错误类型
pub use self::error::{MkhelpError, MkResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心结构体
pub use self::rule::MakeRule;

// 导出输入源模块核心接口
pub use self::source::{MakefileLoader, MakefileSource};

// 导出提取模块核心接口
pub use self::extractor::RuleExtractor;

// 导出展示模块核心接口
pub use self::presenter::HelpPresenter;

// 导出工具模块核心接口
pub use self::utils::PlainTable;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod source;
pub mod extractor;
pub mod presenter;
pub mod utils;
