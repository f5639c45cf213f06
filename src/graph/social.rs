//! 社交关系图
//!
//! 无向、无权的邻接表。用户以名字标识，首次被引用时自动创建。

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// 社交网络图
///
/// 邻接表按用户首次出现的顺序保存，每个用户的好友列表按加边顺序保存。
/// 好友顺序决定了存在多条等长路径时 BFS/DFS 返回哪一条。
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SocialGraph {
    /// 用户 -> 好友列表
    adjacency: IndexMap<String, Vec<String>>,
}

impl SocialGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加用户（幂等），返回是否为新用户
    pub fn add_user(&mut self, user: &str) -> bool {
        if self.adjacency.contains_key(user) {
            return false;
        }
        self.adjacency.insert(user.to_string(), Vec::new());
        debug!(user, "添加用户");
        true
    }

    /// 添加好友关系（无向边）
    ///
    /// 两端用户不存在时自动创建。不去重，也不拒绝自环。
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
        debug!(a, b, "添加好友关系");
    }

    /// 用户是否存在
    pub fn contains_user(&self, user: &str) -> bool {
        self.adjacency.contains_key(user)
    }

    /// 获取好友列表，未知用户返回空切片
    pub fn neighbors(&self, user: &str) -> &[String] {
        self.adjacency
            .get(user)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 好友数（重复边各计一次）
    pub fn degree(&self, user: &str) -> usize {
        self.neighbors(user).len()
    }

    /// 所有用户，按首次出现顺序
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// 用户及其好友列表
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(user, friends)| (user.as_str(), friends.as_slice()))
    }

    pub fn user_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 无向边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl fmt::Display for SocialGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Social Network Graph:")?;
        for (user, friends) in &self.adjacency {
            writeln!(f, "{}: {}", user, friends.join(" "))?;
        }
        Ok(())
    }
}
