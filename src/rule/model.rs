//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑

use std::fmt;

/// 文档化的Makefile规则
/// 一条声明行（冒号结尾）与其紧邻上方的注释块共同构成一条规则
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeRule {
    /// 冒号前的原始联合名称（可能包含多个空格分隔的别名）
    pub joint_name: String,
    /// 按输入顺序切分出的别名列表（不去重）
    pub names: Vec<String>,
    /// 简短描述（`#@@`标记行，换行拼接，列表模式展示）
    pub short_description: String,
    /// 扩展描述（`#@`标记行，逐行去除首尾空白后换行拼接，单规则模式展示）
    pub long_description: String,
    /// 是否为私有规则（注释块中出现`#@private`标记）
    pub is_private: bool,
}

impl MakeRule {
    /// 是否缺少文档（简短描述为空即视为未文档化）
    pub fn is_undocumented(&self) -> bool {
        self.short_description.is_empty()
    }
}

// ======== 为 MakeRule 实现 Display trait（用于 CLI / 日志输出） ========
impl fmt::Display for MakeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joint_name)
    }
}
