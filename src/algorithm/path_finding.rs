//! 路径查找算法
//!
//! 好友链路查询：BFS 最短路径与 DFS 任意路径。
//!
//! 查询从不修改图。未知的起点被视为没有好友的孤立用户，因此
//! `shortest_path(x, x)` 对任何 `x` 都返回 `[x]`，其余情况下未知用户
//! 与"不连通"一样返回空路径。需要区分这两种情况时使用 `checked_*` 系列。

use crate::error::{Error, Result};
use crate::graph::SocialGraph;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// 路径查找器
pub struct PathFinder<'g> {
    graph: &'g SocialGraph,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g SocialGraph) -> Self {
        Self { graph }
    }

    /// BFS 最短路径查找
    ///
    /// 按好友列表的存储顺序扩展，多条最短路径时返回最先发现的一条。
    /// 终点出队时结束搜索。找不到路径时返回空。
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        let mut found = false;
        while let Some(current) = queue.pop_front() {
            if current == end {
                found = true;
                break;
            }

            for neighbor in self.graph.neighbors(current) {
                let neighbor = neighbor.as_str();
                if visited.insert(neighbor) {
                    parent.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        if !found {
            debug!(start, end, visited = visited.len(), "BFS 未找到路径");
            return Vec::new();
        }

        let path = Self::reconstruct_path(end, &parent);
        debug!(start, end, hops = path.len() - 1, "BFS 找到路径");
        path
    }

    /// 沿父指针从终点回溯到起点
    fn reconstruct_path<'a>(end: &'a str, parent: &HashMap<&'a str, &'a str>) -> Vec<String> {
        let mut path = vec![end.to_string()];
        let mut current = end;
        while let Some(&prev) = parent.get(current) {
            path.push(prev.to_string());
            current = prev;
        }
        path.reverse();
        path
    }

    /// DFS 任意路径查找
    ///
    /// 返回按好友顺序深度优先找到的第一条路径，不保证最短。
    /// 使用显式栈：每个栈帧是 (用户, 下一个待检查的好友下标)，
    /// 栈中的用户序列即当前路径，回溯就是弹栈。
    pub fn any_path(&self, start: &str, end: &str) -> Vec<String> {
        if start == end {
            return vec![start.to_string()];
        }

        let mut visited = HashSet::new();
        let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
        visited.insert(start);

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let Some(neighbor) = self.graph.neighbors(current).get(next) else {
                // 好友已全部检查，回溯
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let neighbor = neighbor.as_str();
            if !visited.insert(neighbor) {
                continue;
            }

            if neighbor == end {
                let mut path: Vec<String> =
                    stack.iter().map(|&(user, _)| user.to_string()).collect();
                path.push(neighbor.to_string());
                debug!(start, end, hops = path.len() - 1, "DFS 找到路径");
                return path;
            }

            stack.push((neighbor, 0));
        }

        debug!(start, end, visited = visited.len(), "DFS 未找到路径");
        Vec::new()
    }

    /// BFS 最短路径，区分未知用户与不连通
    pub fn checked_shortest_path(&self, start: &str, end: &str) -> Result<Vec<String>> {
        self.ensure_user(start)?;
        self.ensure_user(end)?;
        Self::non_empty(self.shortest_path(start, end), start, end)
    }

    /// DFS 任意路径，区分未知用户与不连通
    pub fn checked_any_path(&self, start: &str, end: &str) -> Result<Vec<String>> {
        self.ensure_user(start)?;
        self.ensure_user(end)?;
        Self::non_empty(self.any_path(start, end), start, end)
    }

    fn ensure_user(&self, user: &str) -> Result<()> {
        if self.graph.contains_user(user) {
            Ok(())
        } else {
            Err(Error::UserNotFound(user.to_string()))
        }
    }

    fn non_empty(path: Vec<String>, start: &str, end: &str) -> Result<Vec<String>> {
        if path.is_empty() {
            Err(Error::PathNotFound {
                from: start.to_string(),
                to: end.to_string(),
            })
        } else {
            Ok(path)
        }
    }

    /// 判断两个用户是否连通
    pub fn is_reachable(&self, start: &str, end: &str) -> bool {
        !self.shortest_path(start, end).is_empty()
    }

    /// 获取恰好 n 跳之外的用户（按 BFS 发现顺序）
    pub fn n_hop_neighbors(&self, start: &str, n: usize) -> Vec<String> {
        let mut current_level = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);

        for _ in 0..n {
            if current_level.is_empty() {
                break;
            }
            let mut next_level = Vec::new();
            for &user in &current_level {
                for neighbor in self.graph.neighbors(user) {
                    if visited.insert(neighbor.as_str()) {
                        next_level.push(neighbor.as_str());
                    }
                }
            }
            current_level = next_level;
        }

        current_level.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_demo_graph() -> SocialGraph {
        let mut graph = SocialGraph::new();
        for user in ["Alice", "Bob", "Charlie", "David", "Eve"] {
            graph.add_user(user);
        }
        graph.add_edge("Alice", "Bob");
        graph.add_edge("Bob", "Charlie");
        graph.add_edge("Charlie", "David");
        graph.add_edge("Alice", "Eve");
        graph
    }

    // Alice - Bob - Charlie - David
    // Alice - Eve - Frank - David
    // Frank - Gina - Henry - David
    fn create_branching_graph() -> SocialGraph {
        let mut graph = SocialGraph::new();
        graph.add_edge("Alice", "Bob");
        graph.add_edge("Bob", "Charlie");
        graph.add_edge("Charlie", "David");
        graph.add_edge("Alice", "Eve");
        graph.add_edge("Eve", "Frank");
        graph.add_edge("Frank", "David");
        graph.add_edge("Frank", "Gina");
        graph.add_edge("Gina", "Henry");
        graph.add_edge("Henry", "David");
        graph
    }

    fn is_valid_path(graph: &SocialGraph, path: &[String]) -> bool {
        path.windows(2)
            .all(|pair| graph.neighbors(&pair[0]).contains(&pair[1]))
    }

    #[test]
    fn test_demo_shortest_path() {
        let graph = create_demo_graph();
        let finder = PathFinder::new(&graph);
        assert_eq!(
            finder.shortest_path("Alice", "David"),
            ["Alice", "Bob", "Charlie", "David"]
        );
    }

    #[test]
    fn test_demo_any_path() {
        let graph = create_demo_graph();
        let finder = PathFinder::new(&graph);
        assert_eq!(
            finder.any_path("Alice", "David"),
            ["Alice", "Bob", "Charlie", "David"]
        );
    }

    #[test]
    fn test_same_user() {
        let graph = create_demo_graph();
        let finder = PathFinder::new(&graph);
        for user in ["Alice", "Bob", "Charlie", "David", "Eve"] {
            assert_eq!(finder.shortest_path(user, user), [user]);
            assert_eq!(finder.any_path(user, user), [user]);
        }
    }

    #[test]
    fn test_isolated_user() {
        let mut graph = create_demo_graph();
        graph.add_user("Zoe");
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_path("Alice", "Zoe").is_empty());
        assert!(finder.shortest_path("Zoe", "Alice").is_empty());
        assert!(finder.any_path("Alice", "Zoe").is_empty());
        assert!(finder.any_path("Zoe", "Alice").is_empty());
        assert!(!finder.is_reachable("Alice", "Zoe"));
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = create_demo_graph();
        graph.add_edge("Xavier", "Yara");
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_path("Alice", "Yara").is_empty());
        assert!(finder.any_path("Xavier", "David").is_empty());
        assert_eq!(finder.shortest_path("Xavier", "Yara"), ["Xavier", "Yara"]);
    }

    #[test]
    fn test_unknown_users_collapse_to_empty() {
        let graph = create_demo_graph();
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_path("Nobody", "Alice").is_empty());
        assert!(finder.shortest_path("Alice", "Nobody").is_empty());
        assert!(finder.any_path("Nobody", "Alice").is_empty());
        assert!(finder.any_path("Alice", "Nobody").is_empty());
        // 未知起点等于终点时，与已知用户一致
        assert_eq!(finder.shortest_path("Nobody", "Nobody"), ["Nobody"]);
        assert_eq!(finder.any_path("Nobody", "Nobody"), ["Nobody"]);
    }

    #[test]
    fn test_query_does_not_insert_unknown_user() {
        let graph = create_demo_graph();
        let finder = PathFinder::new(&graph);
        finder.shortest_path("Nobody", "Alice");
        finder.any_path("Nobody", "Alice");
        assert!(!graph.contains_user("Nobody"));
        assert_eq!(graph.user_count(), 5);
    }

    #[test]
    fn test_shortest_path_is_optimal() {
        let graph = create_branching_graph();
        let finder = PathFinder::new(&graph);

        // Alice-Bob-Charlie-David 与 Alice-Eve-Frank-David 等长，先发现前者
        let shortest = finder.shortest_path("Alice", "David");
        assert_eq!(shortest, ["Alice", "Bob", "Charlie", "David"]);

        let any = finder.any_path("Alice", "David");
        assert!(shortest.len() <= any.len());
        assert!(is_valid_path(&graph, &shortest));
    }

    #[test]
    fn test_shortest_path_prefers_first_neighbor() {
        let mut graph = SocialGraph::new();
        graph.add_edge("Alice", "Eve");
        graph.add_edge("Alice", "Bob");
        graph.add_edge("Eve", "David");
        graph.add_edge("Bob", "David");
        let finder = PathFinder::new(&graph);

        assert_eq!(finder.shortest_path("Alice", "David"), ["Alice", "Eve", "David"]);
    }

    #[test]
    fn test_any_path_not_necessarily_shortest() {
        let mut graph = SocialGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "D");
        graph.add_edge("A", "D");
        let finder = PathFinder::new(&graph);

        let any = finder.any_path("A", "D");
        assert_eq!(any, ["A", "B", "C", "D"]);
        assert!(is_valid_path(&graph, &any));
        assert_eq!(finder.shortest_path("A", "D"), ["A", "D"]);
    }

    #[test]
    fn test_any_path_backtracks_from_dead_end() {
        let mut graph = SocialGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("A", "D");
        graph.add_edge("D", "E");
        let finder = PathFinder::new(&graph);

        assert_eq!(finder.any_path("A", "E"), ["A", "D", "E"]);
    }

    #[test]
    fn test_any_path_long_chain() {
        let mut graph = SocialGraph::new();
        let users: Vec<String> = (0..100_000).map(|i| format!("u{}", i)).collect();
        for pair in users.windows(2) {
            graph.add_edge(&pair[0], &pair[1]);
        }
        let finder = PathFinder::new(&graph);

        let path = finder.any_path("u0", "u99999");
        assert_eq!(path.len(), 100_000);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = SocialGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");
        graph.add_user("Z");
        let finder = PathFinder::new(&graph);

        assert!(finder.any_path("A", "Z").is_empty());
        assert!(finder.shortest_path("A", "Z").is_empty());
        assert_eq!(finder.shortest_path("A", "C"), ["A", "C"]);
    }

    #[test]
    fn test_checked_paths() {
        let mut graph = create_demo_graph();
        graph.add_user("Zoe");
        let finder = PathFinder::new(&graph);

        assert_eq!(
            finder.checked_shortest_path("Alice", "David").unwrap(),
            ["Alice", "Bob", "Charlie", "David"]
        );
        assert!(matches!(
            finder.checked_shortest_path("Nobody", "Alice"),
            Err(Error::UserNotFound(user)) if user == "Nobody"
        ));
        assert!(matches!(
            finder.checked_any_path("Alice", "Nobody"),
            Err(Error::UserNotFound(user)) if user == "Nobody"
        ));
        assert!(matches!(
            finder.checked_shortest_path("Alice", "Zoe"),
            Err(Error::PathNotFound { .. })
        ));
        assert!(matches!(
            finder.checked_any_path("Zoe", "Alice"),
            Err(Error::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_n_hop_neighbors() {
        let graph = create_demo_graph();
        let finder = PathFinder::new(&graph);

        assert_eq!(finder.n_hop_neighbors("Alice", 0), ["Alice"]);
        assert_eq!(finder.n_hop_neighbors("Alice", 1), ["Bob", "Eve"]);
        assert_eq!(finder.n_hop_neighbors("Alice", 2), ["Charlie"]);
        assert_eq!(finder.n_hop_neighbors("Alice", 3), ["David"]);
        assert!(finder.n_hop_neighbors("Alice", 4).is_empty());
        assert!(finder.n_hop_neighbors("Alice", usize::MAX).is_empty());
        assert!(finder.n_hop_neighbors("Nobody", usize::MAX).is_empty());
    }
}
