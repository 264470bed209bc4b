//! GraphBase - 泛型内存图抽象数据类型
//!
//! 支持有向图与无向图：
//! - 任意顶点元素与边元素类型
//! - 无向边以互为镜像的两条有向边存储
//! - 删除顶点后顶点键保持稠密 (`0..N`)
//! - 交互式命令行 `graphbase-cli`

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{Edge, Edges, Graph, Vertices};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
