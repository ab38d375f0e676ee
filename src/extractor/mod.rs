//! 提取模块：注释块与声明行的扫描及标记解析核心逻辑
pub mod pattern;
pub mod rule_extractor;

// 导出核心接口
pub use self::rule_extractor::RuleExtractor;
