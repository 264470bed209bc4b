//! 图数据结构
//!
//! 支持有向/无向两种模式的泛型图。无向边以两条互为镜像的有向边存储；
//! 顶点键在删除后重新编号，始终保持为 `0..N` 的稠密区间。

use super::edge::Edge;
use super::iter::{Edges, Vertices};
use super::vertex::Vertex;
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 图
///
/// `V` 为顶点元素（图内唯一，作为映射键），`E` 为边元素。
/// 顶点表按插入顺序保存，插入顺序即键顺序。
#[derive(Debug)]
pub struct Graph<V, E> {
    /// 构造参数
    config: GraphConfig,
    /// 顶点表：顶点元素 -> 顶点
    vertices: IndexMap<V, Vertex<V, E>>,
    /// 顶点数量
    num_vertices: usize,
    /// 有向弧数量（无向边计 2，自环计 1）
    num_edges: usize,
}

impl<V, E> Graph<V, E> {
    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: IndexMap::with_capacity(config.vertex_capacity),
            num_vertices: 0,
            num_edges: 0,
        }
    }

    /// 创建空图
    pub fn new(directed: bool) -> Self {
        let config = if directed {
            GraphConfig::directed()
        } else {
            GraphConfig::undirected()
        };
        Self::with_config(config)
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// 按插入顺序遍历顶点元素
    pub fn vertices(&self) -> Vertices<'_, V, E> {
        Vertices::new(self.vertices.keys())
    }

    /// 遍历全部边
    pub fn edges(&self) -> Edges<'_, V, E> {
        Edges::new(self.vertices.values(), self.num_edges)
    }

    /// 按键取顶点元素
    pub fn vertex_at(&self, key: usize) -> Option<&V> {
        let (element, vertex) = self.vertices.get_index(key)?;
        debug_assert_eq!(vertex.key(), key);
        Some(element)
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<V, E> Graph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Clone + PartialEq,
{
    // ==================== 顶点操作 ====================

    /// 顶点是否存在
    pub fn valid_vertex(&self, element: &V) -> bool {
        self.vertices.contains_key(element)
    }

    /// 获取顶点当前的稠密键
    pub fn get_key(&self, element: &V) -> Result<usize> {
        self.vertices
            .get(element)
            .map(Vertex::key)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", element)))
    }

    /// 按键顺序返回全部顶点元素
    pub fn key_vertices(&self) -> Vec<V> {
        let mut keyed: Vec<(usize, &V)> = self
            .vertices
            .values()
            .map(|vertex| (vertex.key(), vertex.element()))
            .collect();
        keyed.sort_unstable_by_key(|&(key, _)| key);
        keyed.into_iter().map(|(_, element)| element.clone()).collect()
    }

    /// 插入顶点，成功时返回新键
    pub fn try_insert_vertex(&mut self, element: V) -> Result<usize> {
        if self.valid_vertex(&element) {
            return Err(GraphError::VertexAlreadyExists(format!("{:?}", element)));
        }

        let key = self.num_vertices;
        let vertex = Vertex::new(key, element.clone(), self.config.adjacency_capacity);
        debug!(vertex = ?element, key, "插入顶点");
        self.vertices.insert(element, vertex);
        self.num_vertices += 1;

        Ok(key)
    }

    /// 插入顶点，已存在时返回 false
    pub fn insert_vertex(&mut self, element: V) -> bool {
        self.try_insert_vertex(element).is_ok()
    }

    /// 删除顶点及所有与之相连的边
    pub fn try_remove_vertex(&mut self, element: &V) -> Result<V> {
        let removed_key = self.get_key(element)?;

        // 入边（无向图中同时带走镜像出边）
        let origins: Vec<V> = self
            .incoming_edges(element)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.origin().clone())
            .collect();
        trace!(vertex = ?element, incoming = origins.len(), "级联删除入边");
        for origin in &origins {
            self.remove_edge(origin, element);
        }

        for vertex in self.vertices.values_mut() {
            if vertex.key() > removed_key {
                vertex.set_key(vertex.key() - 1);
            }
        }
        trace!(from = removed_key, "顶点键重新编号");

        let (removed, vertex) = self
            .vertices
            .shift_remove_entry(element)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", element)))?;
        // 剩余出边随顶点一起丢弃
        self.num_edges -= vertex.num_adjacent();
        self.num_vertices -= 1;
        debug!(
            vertex = ?removed,
            key = removed_key,
            vertices = self.num_vertices,
            edges = self.num_edges,
            "删除顶点"
        );

        Ok(removed)
    }

    /// 删除顶点，不存在时返回 false
    pub fn remove_vertex(&mut self, element: &V) -> bool {
        self.try_remove_vertex(element).is_ok()
    }

    // ==================== 边操作 ====================

    /// 获取 `origin -> destination` 的边
    pub fn get_edge(&self, origin: &V, destination: &V) -> Option<&Edge<V, E>> {
        self.vertices.get(origin)?.edge(destination)
    }

    /// 插入边，缺失的端点会被自动插入
    pub fn try_insert_edge(
        &mut self,
        origin: V,
        destination: V,
        element: E,
        weight: f64,
    ) -> Result<()> {
        if self.get_edge(&origin, &destination).is_some() {
            return Err(GraphError::EdgeAlreadyExists(format!(
                "{:?} -> {:?}",
                origin, destination
            )));
        }

        if !self.valid_vertex(&origin) {
            self.try_insert_vertex(origin.clone())?;
        }
        if !self.valid_vertex(&destination) {
            self.try_insert_vertex(destination.clone())?;
        }

        let edge = Edge::new(origin, destination, element, weight);
        // 自环的反向即自身，存在性检查会跳过镜像
        let mirror = if self.is_directed() || edge.is_self_loop() {
            None
        } else if self.get_edge(edge.destination(), edge.origin()).is_none() {
            Some(edge.reversed())
        } else {
            None
        };

        debug!(
            origin = ?edge.origin(),
            destination = ?edge.destination(),
            weight,
            mirrored = mirror.is_some(),
            "插入边"
        );
        self.attach(edge);
        if let Some(mirror) = mirror {
            self.attach(mirror);
        }

        Ok(())
    }

    /// 插入边，已存在时返回 false
    pub fn insert_edge(&mut self, origin: V, destination: V, element: E, weight: f64) -> bool {
        self.try_insert_edge(origin, destination, element, weight).is_ok()
    }

    /// 删除边，无向图同时删除镜像边；返回被删除的正向边
    pub fn try_remove_edge(&mut self, origin: &V, destination: &V) -> Result<Edge<V, E>> {
        if !self.valid_vertex(origin) {
            return Err(GraphError::VertexNotFound(format!("{:?}", origin)));
        }
        if !self.valid_vertex(destination) {
            return Err(GraphError::VertexNotFound(format!("{:?}", destination)));
        }

        let removed = self.detach(origin, destination).ok_or_else(|| {
            GraphError::EdgeNotFound(format!("{:?} -> {:?}", origin, destination))
        })?;
        // 自环已在上一步删除，这里不会重复计数
        let mirrored = !self.is_directed() && self.detach(destination, origin).is_some();

        debug!(
            origin = ?origin,
            destination = ?destination,
            mirrored,
            edges = self.num_edges,
            "删除边"
        );

        Ok(removed)
    }

    /// 删除边，不存在时返回 false
    pub fn remove_edge(&mut self, origin: &V, destination: &V) -> bool {
        self.try_remove_edge(origin, destination).is_ok()
    }

    /// 返回边的端点，边必须与图中当前登记的边完全一致
    pub fn try_end_vertices(&self, edge: &Edge<V, E>) -> Result<(&V, &V)> {
        match self.get_edge(edge.origin(), edge.destination()) {
            Some(registered) if registered == edge => Ok(registered.endpoints()),
            _ => Err(GraphError::StaleEdge(format!(
                "{:?} -> {:?}",
                edge.origin(),
                edge.destination()
            ))),
        }
    }

    /// 返回边的端点，失效的边返回 None
    pub fn end_vertices(&self, edge: &Edge<V, E>) -> Option<(&V, &V)> {
        self.try_end_vertices(edge).ok()
    }

    /// 从 `vertex` 经 `edge` 可到达的另一端点
    ///
    /// `edge` 必须是 `vertex` 邻接表中登记的出边；无向图中反方向由镜像边表示。
    pub fn opposite(&self, vertex: &V, edge: &Edge<V, E>) -> Option<&V> {
        let registered = self.vertices.get(vertex)?.edge(edge.destination())?;
        (registered == edge).then(|| registered.destination())
    }

    // ==================== 邻接查询 ====================

    /// 出边可到达的顶点
    pub fn adj_vertices(&self, vertex: &V) -> Option<impl Iterator<Item = &V> + '_> {
        self.vertices.get(vertex).map(Vertex::adjacent_vertices)
    }

    /// 出边，O(出度)
    pub fn outgoing_edges(&self, vertex: &V) -> Option<impl Iterator<Item = &Edge<V, E>> + '_> {
        self.vertices.get(vertex).map(Vertex::outgoing)
    }

    /// 入边，需要扫描全部边，O(E)
    pub fn incoming_edges(&self, vertex: &V) -> Option<Vec<&Edge<V, E>>> {
        if !self.valid_vertex(vertex) {
            return None;
        }
        Some(
            self.edges()
                .filter(|edge| edge.destination() == vertex)
                .collect(),
        )
    }

    /// 出度，O(1)
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.vertices.get(vertex).map(Vertex::num_adjacent)
    }

    /// 入度，逐个检查其他顶点，O(V)
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        if !self.valid_vertex(vertex) {
            return None;
        }
        Some(
            self.vertices
                .values()
                .filter(|other| other.edge(vertex).is_some())
                .count(),
        )
    }

    // ==================== 内部辅助 ====================

    fn attach(&mut self, edge: Edge<V, E>) {
        if let Some(vertex) = self.vertices.get_mut(edge.origin()) {
            if vertex.add_adjacent(edge) {
                self.num_edges += 1;
            }
        }
    }

    fn detach(&mut self, origin: &V, destination: &V) -> Option<Edge<V, E>> {
        let edge = self.vertices.get_mut(origin)?.remove_adjacent(destination)?;
        self.num_edges -= 1;
        Some(edge)
    }
}

impl<V, E> Clone for Graph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Clone + PartialEq,
{
    /// 顶点按原顺序重新插入，边逐条经 `insert_edge` 重建（无向镜像重新推导）
    fn clone(&self) -> Self {
        let mut graph = Self::with_config(self.config);
        for vertex in self.vertices() {
            graph.insert_vertex(vertex.clone());
        }
        for edge in self.edges() {
            graph.insert_edge(
                edge.origin().clone(),
                edge.destination().clone(),
                edge.element().clone(),
                edge.weight(),
            );
        }
        graph
    }
}

impl<V, E> PartialEq for Graph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.is_directed() == other.is_directed()
            && self.num_vertices == other.num_vertices
            && self.num_edges == other.num_edges
            && self.vertices().eq(other.vertices())
            && self.edges().all(|edge| {
                other.get_edge(edge.origin(), edge.destination()) == Some(edge)
            })
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_vertices == 0 {
            return writeln!(f, "Graph not defined!!");
        }
        writeln!(
            f,
            "Graph: {} vertices, {} edges",
            self.num_vertices, self.num_edges
        )?;
        for vertex in self.vertices.values() {
            writeln!(f, "{}", vertex)?;
        }
        Ok(())
    }
}
