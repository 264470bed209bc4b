//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边已存在: {0}")]
    EdgeAlreadyExists(String),

    #[error("边句柄已失效: {0}")]
    StaleEdge(String),

    #[error("命令错误: {0}")]
    CommandError(String),
}
