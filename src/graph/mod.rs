//! 图核心模块
//!
//! 定义边、顶点和图的核心数据结构

mod edge;
mod graph;
mod iter;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use iter::{Edges, Vertices};
