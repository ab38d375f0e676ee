//! 注释标记迷你语言的预编译模式
//! 全局Lazy静态量，首次访问时编译一次，全程复用

use once_cell::sync::Lazy;
use regex::Regex;

/// 规则声明行模式
/// 可选行首空白 + 一个或多个单词字符/连字符/空格 + 字面冒号
/// 捕获组1为冒号前的联合名称（不含行首空白）
pub static DECLARATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*([\w -]+):").unwrap());

/// 别名切分模式：联合名称按单词字符/连字符连续段切分
pub static NAME_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w-]+").unwrap());

/// 简短描述标记：`#@@` + 可选空白 + 内容
/// 捕获组1为内容（标记后空白被吞掉，行尾空白保留）
pub static SHORT_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#@@[ \t]*(.*)").unwrap());

/// 扩展描述标记：`#@` + 非`@`字符开头的内容
/// `[^@]`排除了`#@@`行，简短描述行天然不会进入扩展描述
pub static LONG_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#@([^@][ \t]*.*)").unwrap());

/// 私有规则标记：注释块中任意位置出现`#@private`即生效
pub static PRIVATE_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#@private").unwrap());
