//! mkhelp 命令行入口
//! 功能说明：
//! 1. 解析命令行参数并组装为不可变全局配置
//! 2. 提取前完整读取所有Makefile（任一路径不可读即启动失败）
//! 3. 按配置渲染列表模式或单规则模式帮助信息到标准输出
//!
//! 运行命令：
//! mkhelp [-p] [-r RULE] <MAKEFILE>...

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env, Target};

use mkhelp::{ConfigManager, HelpPresenter, MakefileLoader, RuleExtractor};

/// 列表模式的前导说明文字
const LISTING_PREAMBLE: &str = "Below are the rules provided by this Makefile.\n\
For extended help on a specific rule, try `make help-rule` or `make rule-help`\n";

/// Print help from a Makefile
#[derive(Parser, Debug)]
#[command(name = "mkhelp", version, about = "Print help from a Makefile")]
struct Cli {
    /// Show private rules
    #[arg(short = 'p', long)]
    show_private_rules: bool,

    /// The rule to show help about. If none is given, help is given for all rules
    #[arg(short = 'r', long)]
    rule: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// The path of the Makefile to show help about
    #[arg(required = true, value_name = "MAKEFILE")]
    makefiles: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ========== 1. 日志系统初始化 ==========
    // 日志输出到标准错误，避免污染帮助文本；--verbose时放开到debug级别
    let default_level = if cli.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .init();

    // ========== 2. 配置组装 ==========
    let config = ConfigManager::custom()
        .makefile_paths(cli.makefiles)
        .show_private_rules(cli.show_private_rules)
        .rule_name(cli.rule)
        .verbose(cli.verbose)
        .build();

    // ========== 3. 读取全部Makefile ==========
    // 在提取开始前完整读入内存，路径不可读属于致命启动错误
    let sources = MakefileLoader::load_all(&config.makefile_paths)
        .context("无法读取给定的Makefile")?;

    // ========== 4. 提取规则 ==========
    let rules = RuleExtractor::extract_all(&sources);

    // ========== 5. 渲染输出 ==========
    match config.rule_name.as_deref() {
        None => {
            println!("{}", LISTING_PREAMBLE);
            println!(
                "{}",
                HelpPresenter::render_listing(&rules, config.show_private_rules)
            );
        }
        Some(rule_name) => {
            println!("{}", HelpPresenter::render_rule_help(&rules, rule_name));
        }
    }

    Ok(())
}
