//! 顶点和边的惰性迭代器
//!
//! 迭代器借用整张图，迭代期间图不可被修改；每次调用都从头开始新的一轮。

use super::edge::Edge;
use super::vertex::Vertex;
use indexmap::map::{Keys, Values};
use std::iter::FusedIterator;

/// 按插入顺序（即键顺序）遍历全部顶点元素
pub struct Vertices<'a, V, E> {
    inner: Keys<'a, V, Vertex<V, E>>,
}

impl<'a, V, E> Vertices<'a, V, E> {
    pub(crate) fn new(inner: Keys<'a, V, Vertex<V, E>>) -> Self {
        Self { inner }
    }
}

impl<'a, V, E> Iterator for Vertices<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> ExactSizeIterator for Vertices<'_, V, E> {}

impl<V, E> FusedIterator for Vertices<'_, V, E> {}

/// 遍历全部边：先按顶点插入顺序，再按各顶点邻接表顺序
pub struct Edges<'a, V, E> {
    vertices: Values<'a, V, Vertex<V, E>>,
    current: Option<Values<'a, V, Edge<V, E>>>,
    remaining: usize,
}

impl<'a, V, E> Edges<'a, V, E> {
    pub(crate) fn new(vertices: Values<'a, V, Vertex<V, E>>, num_edges: usize) -> Self {
        Self {
            vertices,
            current: None,
            remaining: num_edges,
        }
    }
}

impl<'a, V, E> Iterator for Edges<'a, V, E> {
    type Item = &'a Edge<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.as_mut().and_then(|edges| edges.next()) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(edge);
            }
            self.current = Some(self.vertices.next()?.outgoing());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, E> ExactSizeIterator for Edges<'_, V, E> {}

impl<V, E> FusedIterator for Edges<'_, V, E> {}
