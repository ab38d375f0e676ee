//! 全局错误类型定义

use thiserror::Error;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum MkhelpError {
    // 输入源相关错误
    #[error("Makefile读取失败：{0}")]
    SourceReadError(String),
    #[error("无效输入：{0}")]
    InvalidInput(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type MkResult<T> = Result<T, MkhelpError>;
