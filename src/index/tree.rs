//! Indented tree rendering over a GraphIndex

use super::indexer::GraphIndex;
use super::types::CYCLE_SENTINEL;
use crate::graph::{FlatmapResult, NodeId};
use serde::Serialize;
use tracing::warn;

const BRANCH: &str = "|--";
const INDENT: &str = "|   ";

/// One printed line of a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    /// Nesting level, 0 for the direct children of the start node
    pub depth: usize,
    pub id: NodeId,
    /// `"<label> (<id>)"`, or just the id when unlabeled
    pub text: String,
    /// Decorated predicate from the parent, when labeled
    pub relation: Option<String>,
    /// The node was already on the current path and was not descended
    pub cycle: bool,
}

impl TreeLine {
    pub fn render(&self) -> String {
        format!("{}{}{}", INDENT.repeat(self.depth), BRANCH, self.text)
    }
}

/// Every descendant of `start` in childrenOf order, depth first
///
/// `start` itself is not included. Fails with `UnknownNode` when `start`
/// is not in the index.
pub fn render_tree(index: &GraphIndex, start: &NodeId) -> FlatmapResult<Vec<TreeLine>> {
    index.label(start)?;
    let mut lines = Vec::new();
    let mut path = vec![start.clone()];
    walk(index, start, 0, &mut path, &mut lines)?;
    Ok(lines)
}

/// [`render_tree`] joined into text, one line per descendant
pub fn render_tree_text(index: &GraphIndex, start: &NodeId) -> FlatmapResult<String> {
    let lines = render_tree(index, start)?;
    Ok(lines
        .iter()
        .map(TreeLine::render)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn walk(
    index: &GraphIndex,
    parent: &NodeId,
    depth: usize,
    path: &mut Vec<NodeId>,
    lines: &mut Vec<TreeLine>,
) -> FlatmapResult<()> {
    for child in index.children(parent) {
        let relation = index.relation(parent, child).map(str::to_string);

        if path.contains(child) {
            warn!(%parent, %child, "cycle in tree, not descending");
            lines.push(TreeLine {
                depth,
                id: child.clone(),
                text: format!("{} ({})", CYCLE_SENTINEL, child),
                relation,
                cycle: true,
            });
            continue;
        }

        let label = index.label(child)?;
        let text = if label.is_empty() {
            child.to_string()
        } else {
            format!("{} ({})", label, child)
        };
        lines.push(TreeLine {
            depth,
            id: child.clone(),
            text,
            relation,
            cycle: false,
        });

        path.push(child.clone());
        walk(index, child, depth + 1, path, lines)?;
        path.pop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, FlatmapError, GraphExport, Node};
    use crate::index::Direction;

    fn tree_export() -> GraphExport {
        // UBERON:1 <- a <- b, UBERON:1 <- c  (read INCOMING)
        GraphExport::new(
            vec![
                Node::new("UBERON:1", "trunk"),
                Node::new("a", "first"),
                Node::new("b", ""),
                Node::new("c", "third"),
            ],
            vec![
                Edge::new("a", "apinatomy:next", "UBERON:1"),
                Edge::new("b", "apinatomy:next", "a"),
                Edge::new("c", "apinatomy:next", "UBERON:1"),
            ],
        )
    }

    #[test]
    fn test_render_incoming_tree() {
        let index = GraphIndex::build(&tree_export(), Direction::Incoming).unwrap();
        let text = render_tree_text(&index, &"UBERON:1".into()).unwrap();

        assert_eq!(text, "|--first (a)\n|   |--b\n|--third (c)");
    }

    #[test]
    fn test_lines_carry_relation_and_depth() {
        let index = GraphIndex::build(&tree_export(), Direction::Incoming).unwrap();
        let lines = render_tree(&index, &"UBERON:1".into()).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].depth, 1);
        assert_eq!(lines[1].id.as_str(), "b");
        assert_eq!(lines[1].relation.as_deref(), Some("<apinatomy:next"));
    }

    #[test]
    fn test_leaf_start_renders_nothing() {
        let index = GraphIndex::build(&tree_export(), Direction::Incoming).unwrap();
        assert!(render_tree(&index, &"b".into()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_start_fails() {
        let index = GraphIndex::build(&tree_export(), Direction::Incoming).unwrap();
        assert!(matches!(
            render_tree(&index, &"missing".into()),
            Err(FlatmapError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_cycle_is_cut() {
        let export = GraphExport::new(
            vec![Node::new("a", "A"), Node::new("b", "B")],
            vec![Edge::new("a", "p", "b"), Edge::new("b", "p", "a")],
        );
        let index = GraphIndex::build(&export, Direction::Outgoing).unwrap();
        let lines = render_tree(&index, &"a".into()).unwrap();

        assert_eq!(lines.len(), 2);
        assert!(!lines[0].cycle);
        assert!(lines[1].cycle);
        assert_eq!(lines[1].render(), "|   |--CYCLE DETECTED (a)");
    }
}
