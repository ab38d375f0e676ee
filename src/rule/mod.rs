//! 规则模块：规则数据模型定义
pub mod model;

// 导出核心接口
pub use self::model::MakeRule;
