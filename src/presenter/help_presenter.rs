//! 帮助信息展示器
//! 消费提取出的规则序列，渲染列表模式或单规则模式的终端输出

use crate::rule::MakeRule;
use crate::utils::PlainTable;

/// 未文档化规则区块的标题字面量
const UNDOCUMENTED_HEADER: &str = "Undocumented Rules";

/// 帮助信息展示器
pub struct HelpPresenter;

impl HelpPresenter {
    /// 渲染列表模式输出
    ///
    /// 过滤规则：私有规则默认排除，`show_private`为true时保留；
    /// 已文档化规则进入两列表格（联合名称 → 简短描述），
    /// 未文档化规则进入末尾的名称列表
    ///
    /// 输出结构：表格、两个空行、`Undocumented Rules`标题加连字符下划线、
    /// 未文档化规则名称（按提取顺序）
    pub fn render_listing(rules: &[MakeRule], show_private: bool) -> String {
        let mut table = PlainTable::new();
        let mut undocumented_rules: Vec<&str> = Vec::new();

        for rule in rules {
            if rule.is_private && !show_private {
                continue;
            }
            if rule.is_undocumented() {
                undocumented_rules.push(rule.joint_name.as_str());
                continue;
            }
            table.push(rule.joint_name.clone(), rule.short_description.clone());
        }

        format!(
            "{}\n\n\n{}\n{}\n{}\n",
            table.render(),
            UNDOCUMENTED_HEADER,
            "-".repeat(UNDOCUMENTED_HEADER.len()),
            undocumented_rules.join("\n")
        )
    }

    /// 渲染单规则模式输出
    ///
    /// 在全部规则中查找第一条别名包含`rule_name`的规则（不过滤私有规则），
    /// 命中则输出标题行与扩展描述，未命中则输出包含查询名称的未找到提示
    pub fn render_rule_help(rules: &[MakeRule], rule_name: &str) -> String {
        for rule in rules {
            if rule.names.iter().any(|name| name == rule_name) {
                return format!(
                    "Help about `make {}`:\n\n{}\n",
                    rule_name, rule.long_description
                );
            }
        }
        format!("Rule `{}` not found", rule_name)
    }
}
