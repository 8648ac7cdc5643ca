use crate::errors::SearchError;
use super::GraphNodeMap;

/// Construct the shortest path from the start node to the node at `goal_index`
/// Walks the parent indices back to the start (parent `usize::MAX`), then reverses
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, SearchError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != usize::MAX {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(SearchError::NoPathFound),
        }
    }

    path.reverse();

    if path.is_empty() {
        return Err(SearchError::NoPathFound);
    }

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_path_reconstruction() {
        let mut node_map: GraphNodeMap<String, u32> = GraphNodeMap::default();

        let a_index = node_map.insert_full("A".to_string(), (usize::MAX, 0)).0;
        let b_index = node_map.insert_full("B".to_string(), (a_index, 1)).0;
        let c_index = node_map.insert_full("C".to_string(), (a_index, 3)).0;
        let d_index = node_map.insert_full("D".to_string(), (c_index, 4)).0;

        let path_to_d = shortest_path(&node_map, d_index).unwrap();
        assert_eq!(path_to_d, vec!["A", "C", "D"]);

        let path_to_b = shortest_path(&node_map, b_index).unwrap();
        assert_eq!(path_to_b, vec!["A", "B"]);

        let path_to_a = shortest_path(&node_map, a_index).unwrap();
        assert_eq!(path_to_a, vec!["A"]);
    }

    #[test]
    fn test_shortest_path_bad_index() {
        let node_map: GraphNodeMap<String, u32> = GraphNodeMap::default();
        assert_eq!(shortest_path(&node_map, 3), Err(SearchError::NoPathFound));
    }
}
