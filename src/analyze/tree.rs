use crate::types::snapshot::FileNode;

/// Depth-first walk over every node. The visitor receives each node with
/// its depth (root nodes are depth 0) and returns `false` to stop the walk
/// early. Returns whether the walk ran to completion.
pub fn visit_nodes(nodes: &[FileNode], visitor: &mut impl FnMut(&FileNode, usize) -> bool) -> bool {
    visit_at(nodes, 0, visitor)
}

fn visit_at(
    nodes: &[FileNode],
    depth: usize,
    visitor: &mut impl FnMut(&FileNode, usize) -> bool,
) -> bool {
    for node in nodes {
        if !visitor(node, depth) {
            return false;
        }
        if let Some(children) = &node.children {
            if !visit_at(children, depth + 1, visitor) {
                return false;
            }
        }
    }
    true
}

pub fn count_files(nodes: &[FileNode]) -> usize {
    let mut count = 0;
    visit_nodes(nodes, &mut |node, _| {
        if node.is_file() {
            count += 1;
        }
        true
    });
    count
}

/// Mean depth across all files; an empty tree yields 0.
pub fn average_file_depth(nodes: &[FileNode]) -> f64 {
    let mut total_depth = 0usize;
    let mut file_count = 0usize;
    visit_nodes(nodes, &mut |node, depth| {
        if node.is_file() {
            total_depth += depth;
            file_count += 1;
        }
        true
    });
    if file_count > 0 {
        total_depth as f64 / file_count as f64
    } else {
        0.0
    }
}

/// True when no file name contains a space or exceeds 50 characters.
/// Short-circuits at the first violation.
pub fn has_clean_file_names(nodes: &[FileNode]) -> bool {
    visit_nodes(nodes, &mut |node, _| {
        if node.is_file() {
            let name = node.name.to_lowercase();
            if name.contains(' ') || name.len() > 50 {
                return false;
            }
        }
        true
    })
}
