//! 用户分组
//!
//! 与社交图相互独立：分组成员不校验是否为图中用户，也不去重。

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// 分组注册表
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GroupRegistry {
    /// 分组名 -> 成员列表（按加入顺序）
    groups: IndexMap<String, Vec<String>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将用户加入分组，分组不存在时自动创建
    pub fn add_member(&mut self, group: &str, user: &str) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .push(user.to_string());
        debug!(group, user, "加入分组");
    }

    /// 获取分组成员
    pub fn members(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// 用户所在的所有分组
    pub fn groups_of(&self, user: &str) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|(_, members)| members.iter().any(|m| m == user))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for GroupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Groups and Members:")?;
        for (name, members) in &self.groups {
            writeln!(f, "Group: {}", name)?;
            for member in members {
                writeln!(f, " - {}", member)?;
            }
        }
        Ok(())
    }
}
