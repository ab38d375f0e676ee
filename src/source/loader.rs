//! Makefile读取管理器
//! 负责在提取开始前，将全部输入文件一次性完整读入内存

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{MkResult, MkhelpError};

/// 已读入内存的单个Makefile源
#[derive(Debug, Clone)]
pub struct MakefileSource {
    /// 源文件路径（用于日志与错误提示）
    pub path: PathBuf,
    /// 完整文件内容
    pub content: String,
}

/// Makefile读取管理器
pub struct MakefileLoader;

impl MakefileLoader {
    /// 按给定顺序读取全部Makefile
    /// 任一路径不可读即整体失败，保证错误在提取开始前暴露
    pub fn load_all(paths: &[PathBuf]) -> MkResult<Vec<MakefileSource>> {
        if paths.is_empty() {
            return Err(MkhelpError::InvalidInput(
                "至少需要一个Makefile路径".to_string(),
            ));
        }

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            sources.push(Self::load(path)?);
        }
        Ok(sources)
    }

    /// 读取单个Makefile（文件句柄随读取结束即释放）
    pub fn load(path: &Path) -> MkResult<MakefileSource> {
        let content = fs::read_to_string(path).map_err(|e| {
            MkhelpError::SourceReadError(format!("{}：{}", path.display(), e))
        })?;

        debug!("已读取 [{}]，共 {} 字节", path.display(), content.len());

        Ok(MakefileSource {
            path: path.to_path_buf(),
            content,
        })
    }
}
