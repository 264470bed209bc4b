//! 边定义
//!
//! 带权重和元素的有向弧，以顶点元素标识两端

use std::fmt;

/// 边
///
/// 创建后不可修改。无向图中的一条逻辑边由两条互为镜像的 `Edge` 表示。
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, E> {
    /// 边元素
    element: E,
    /// 权重
    weight: f64,
    /// 源顶点元素
    origin: V,
    /// 目标顶点元素
    destination: V,
}

impl<V, E> Edge<V, E> {
    /// 创建新边
    pub(crate) fn new(origin: V, destination: V, element: E, weight: f64) -> Self {
        Self {
            element,
            weight,
            origin,
            destination,
        }
    }

    /// 获取边元素
    pub fn element(&self) -> &E {
        &self.element
    }

    /// 获取权重
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 获取源顶点
    pub fn origin(&self) -> &V {
        &self.origin
    }

    /// 获取目标顶点
    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// 获取 (源, 目标)
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.origin, &self.destination)
    }
}

impl<V: Clone, E: Clone> Edge<V, E> {
    /// 反向镜像边（元素和权重相同）
    pub(crate) fn reversed(&self) -> Self {
        Self::new(
            self.destination.clone(),
            self.origin.clone(),
            self.element.clone(),
            self.weight,
        )
    }
}

impl<V: PartialEq, E> Edge<V, E> {
    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for Edge<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} -> {:?} ({:?}, {})",
            self.origin, self.destination, self.element, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let e = Edge::new("A", "B", "x", 2.0);

        assert_eq!(e.element(), &"x");
        assert_eq!(e.weight(), 2.0);
        assert_eq!(e.endpoints(), (&"A", &"B"));
        assert!(!e.is_self_loop());
    }

    #[test]
    fn test_edge_reversed() {
        let e = Edge::new("A", "B", "x", 2.0);
        let r = e.reversed();

        assert_eq!(r.origin(), &"B");
        assert_eq!(r.destination(), &"A");
        assert_eq!(r.element(), e.element());
        assert_eq!(r.weight(), e.weight());
        assert_ne!(r, e);
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new("A", "A", "s", 0.5);
        assert!(e.is_self_loop());
        assert_eq!(e.to_string(), "\"A\" -> \"A\" (\"s\", 0.5)");
    }
}
