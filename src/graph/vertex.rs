//! 顶点定义
//!
//! 顶点持有稠密键、调用方提供的元素，以及以目标元素为键的出边邻接表

use super::edge::Edge;
use indexmap::map::{Keys, Values};
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// 顶点（仅在 crate 内部可见）
#[derive(Debug)]
pub(crate) struct Vertex<V, E> {
    /// 稠密键，删除其他顶点时会被重新编号
    key: usize,
    /// 顶点元素
    element: V,
    /// 出边：目标顶点元素 -> 边
    adjacency: IndexMap<V, Edge<V, E>>,
}

impl<V, E> Vertex<V, E> {
    /// 创建新顶点
    pub(crate) fn new(key: usize, element: V, adjacency_capacity: usize) -> Self {
        Self {
            key,
            element,
            adjacency: IndexMap::with_capacity(adjacency_capacity),
        }
    }

    pub(crate) fn key(&self) -> usize {
        self.key
    }

    pub(crate) fn set_key(&mut self, key: usize) {
        self.key = key;
    }

    pub(crate) fn element(&self) -> &V {
        &self.element
    }

    /// 出度
    pub(crate) fn num_adjacent(&self) -> usize {
        self.adjacency.len()
    }

    /// 邻接顶点
    pub(crate) fn adjacent_vertices(&self) -> Keys<'_, V, Edge<V, E>> {
        self.adjacency.keys()
    }

    /// 出边
    pub(crate) fn outgoing(&self) -> Values<'_, V, Edge<V, E>> {
        self.adjacency.values()
    }
}

impl<V: Clone + Eq + Hash, E> Vertex<V, E> {
    /// 获取到 `destination` 的边
    pub(crate) fn edge(&self, destination: &V) -> Option<&Edge<V, E>> {
        self.adjacency.get(destination)
    }

    /// 添加出边，目标已存在时返回 false 且不覆盖
    pub(crate) fn add_adjacent(&mut self, edge: Edge<V, E>) -> bool {
        if self.adjacency.contains_key(edge.destination()) {
            return false;
        }
        self.adjacency.insert(edge.destination().clone(), edge);
        true
    }

    /// 移除到 `destination` 的出边
    pub(crate) fn remove_adjacent(&mut self, destination: &V) -> Option<Edge<V, E>> {
        self.adjacency.shift_remove(destination)
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for Vertex<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({}):", self.element, self.key)?;
        for (destination, edge) in &self.adjacency {
            write!(
                f,
                " -> {:?} [{:?}, {}]",
                destination,
                edge.element(),
                edge.weight()
            )?;
        }
        Ok(())
    }
}
