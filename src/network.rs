//! 社交网络会话
//!
//! 将社交图与分组注册表放在一起，二者之间没有任何约束。

use crate::graph::{GroupRegistry, SocialGraph};
use serde::Serialize;

/// 演示场景中的用户
pub const DEMO_USERS: &[&str] = &["Alice", "Bob", "Charlie", "David", "Eve"];

/// 演示场景中的好友关系
pub const DEMO_FRIENDSHIPS: &[(&str, &str)] = &[
    ("Alice", "Bob"),
    ("Bob", "Charlie"),
    ("Charlie", "David"),
    ("Alice", "Eve"),
];

/// 演示场景中的分组成员
pub const DEMO_GROUPS: &[(&str, &str)] = &[
    ("Friends", "Alice"),
    ("Friends", "Bob"),
    ("Colleagues", "Charlie"),
    ("Colleagues", "David"),
];

#[derive(Debug, Clone, Default, Serialize)]
pub struct Network {
    pub graph: SocialGraph,
    pub groups: GroupRegistry,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// 构建固定的演示网络：5 个用户、4 条好友关系、2 个分组
    pub fn demo() -> Self {
        let mut network = Self::new();
        for user in DEMO_USERS {
            network.graph.add_user(user);
        }
        for (a, b) in DEMO_FRIENDSHIPS {
            network.graph.add_edge(a, b);
        }
        for (group, user) in DEMO_GROUPS {
            network.groups.add_member(group, user);
        }
        network
    }
}

/// 路径的单行文本形式
pub fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        "No path found.".to_string()
    } else {
        path.join(" ")
    }
}
