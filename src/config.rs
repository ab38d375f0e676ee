//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 待解析的Makefile路径列表
    pub makefile_paths: Vec<PathBuf>,
    // 列表模式下是否显示私有规则
    pub show_private_rules: bool,
    // 单规则模式的查询名称（None表示列表模式）
    pub rule_name: Option<String>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            makefile_paths: Vec::new(),
            show_private_rules: false,
            rule_name: None,
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn makefile_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.makefile_paths = paths;
        self
    }

    pub fn show_private_rules(mut self, show: bool) -> Self {
        self.config.show_private_rules = show;
        self
    }

    pub fn rule_name(mut self, name: Option<String>) -> Self {
        self.config.rule_name = name;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
