//! 规则提取器
//! 负责从Makefile文本中扫描声明行及其紧邻上方的注释块，解析为MakeRule序列
//!
//! 两阶段实现：
//! 1. 行扫描阶段：单趟遍历所有行，维护当前连续注释块，遇到声明行即产出
//!    （注释块, 联合名称）配对；任何非注释、非声明行（含空行）都会截断注释块
//! 2. 标记解析阶段：对注释块逐行匹配 `#@@`/`#@`/`#@private` 标记，组装规则字段

use log::debug;

use crate::rule::MakeRule;
use crate::source::MakefileSource;

use super::pattern::{DECLARATION_RE, LONG_TAG_RE, NAME_TOKEN_RE, PRIVATE_TAG_RE, SHORT_TAG_RE};

/// 描述拼接使用的行分隔符
const LINE_SEPARATOR: &str = "\n";

/// 规则提取器
/// 提供静态方法，无内部状态，纯函数式处理输入文本
pub struct RuleExtractor;

impl RuleExtractor {
    /// 从单个文本源中提取全部规则（按出现顺序）
    ///
    /// # 参数
    /// - `text`: 已完整读入内存的Makefile文本
    ///
    /// # 返回值
    /// 按源内顺序排列的规则列表；无声明行时返回空列表
    ///
    /// # 核心逻辑
    /// 1. 逐行扫描，行首为`#`的行进入当前注释块
    /// 2. 命中声明行且别名非空时产出规则并清空注释块
    /// 3. 其余任何行（含空行）截断注释块
    pub fn extract(text: &str) -> Vec<MakeRule> {
        let mut rules = Vec::new();
        let mut comment_run: Vec<&str> = Vec::new();

        for line in text.lines() {
            if let Some(joint_name) = Self::match_declaration(line) {
                let names = Self::tokenize_names(joint_name);
                // 别名为空的伪声明行（如仅空格加冒号）不构成规则
                if names.is_empty() {
                    comment_run.clear();
                    continue;
                }
                rules.push(Self::parse_block(&comment_run, joint_name, names));
                comment_run.clear();
            } else if line.starts_with('#') {
                // 注释行必须从行首开始，缩进注释不计入注释块
                comment_run.push(line);
            } else {
                comment_run.clear();
            }
        }

        rules
    }

    /// 从多个文本源中提取全部规则
    /// 源按给定顺序处理，结果按源顺序拼接
    pub fn extract_all(sources: &[MakefileSource]) -> Vec<MakeRule> {
        let mut all_rules = Vec::new();
        for source in sources {
            let rules = Self::extract(&source.content);
            debug!(
                "从 [{}] 提取到 {} 条规则",
                source.path.display(),
                rules.len()
            );
            all_rules.extend(rules);
        }
        all_rules
    }

    /// 判断是否为声明行，是则返回冒号前的联合名称
    fn match_declaration(line: &str) -> Option<&str> {
        DECLARATION_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|joint| joint.as_str())
    }

    /// 联合名称按单词字符/连字符连续段切分为别名列表（保序、不去重）
    fn tokenize_names(joint_name: &str) -> Vec<String> {
        NAME_TOKEN_RE
            .find_iter(joint_name)
            .map(|token| token.as_str().to_string())
            .collect()
    }

    /// 标记解析：将一个注释块与联合名称组装为规则记录
    ///
    /// 逐行独立匹配三类标记：
    /// - `#@@`行：捕获内容进入简短描述（标记后空白吞掉，行尾空白保留）
    /// - `#@`后接非`@`的行：捕获内容去除首尾空白后进入扩展描述
    /// - `#@private`：置私有标记，与描述内容互不影响
    /// 未命中任何标记的普通注释行不产生内容
    fn parse_block(comment_run: &[&str], joint_name: &str, names: Vec<String>) -> MakeRule {
        let mut short_lines: Vec<&str> = Vec::new();
        let mut long_lines: Vec<&str> = Vec::new();
        let mut is_private = false;

        for line in comment_run {
            if let Some(content) = SHORT_TAG_RE.captures(line).and_then(|caps| caps.get(1)) {
                short_lines.push(content.as_str());
            }
            if let Some(content) = LONG_TAG_RE.captures(line).and_then(|caps| caps.get(1)) {
                long_lines.push(content.as_str().trim());
            }
            if PRIVATE_TAG_RE.is_match(line) {
                is_private = true;
            }
        }

        MakeRule {
            joint_name: joint_name.to_string(),
            names,
            short_description: short_lines.join(LINE_SEPARATOR),
            long_description: long_lines.join(LINE_SEPARATOR),
            is_private,
        }
    }
}
