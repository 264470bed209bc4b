//! 图配置

/// 图的构造参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// 是否为有向图（构造后不可更改）
    pub directed: bool,
    /// 顶点表预分配容量
    pub vertex_capacity: usize,
    /// 每个顶点邻接表的预分配容量
    pub adjacency_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            vertex_capacity: 0,
            adjacency_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// 有向图配置
    pub fn directed() -> Self {
        Self::default()
    }

    /// 无向图配置
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::default()
        }
    }

    /// 设置顶点表容量
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    /// 设置邻接表容量
    pub fn with_adjacency_capacity(mut self, capacity: usize) -> Self {
        self.adjacency_capacity = capacity;
        self
    }
}
