use crate::layout::{EntryKind, Layout};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (directory, file or marker).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    kind: EntryKind,
}
impl TreeNode {
    fn new(name: String, kind: EntryKind) -> Self {
        Self {
            name,
            children: Vec::new(),
            kind,
        }
    }
}

/// Returns the node for `path`, creating it and any missing ancestors as directories.
fn ensure_node(
    lookup: &mut HashMap<PathBuf, Rc<RefCell<TreeNode>>>,
    path: &Path,
    kind: EntryKind,
) -> Rc<RefCell<TreeNode>> {
    if let Some(node) = lookup.get(path) {
        return Rc::clone(node);
    }

    let parent_path = path.parent().unwrap_or_else(|| Path::new(""));
    let parent = ensure_node(lookup, parent_path, EntryKind::Directory);

    let name = path
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let node = Rc::new(RefCell::new(TreeNode::new(name, kind)));
    parent.borrow_mut().children.push(Rc::clone(&node));
    lookup.insert(path.to_path_buf(), Rc::clone(&node));

    node
}

/// Build the tree from the layout entries, returning the root node.
fn build_tree(layout: &Layout, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, EntryKind::Directory)));

    // layout paths are relative, so the empty path stands for the destination
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for (path, kind) in layout.entries() {
        ensure_node(&mut lookup, &path, kind);
    }

    root
}

/// Renders `node` and its children as ASCII tree lines.
fn render_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let node_borrow = node.borrow();

    let connector = if is_last { "└── " } else { "├── " };
    let name = match node_borrow.kind {
        EntryKind::Directory => node_borrow.name.blue(),
        EntryKind::File => node_borrow.name.green(),
        EntryKind::Marker => node_borrow.name.dimmed(),
    };
    lines.push(format!("{}{}{}", prefix.yellow(), connector.yellow(), name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        render_tree(child, &child_prefix, i == len - 1, lines);
    }
}

/// Lines of the planned tree for `layout` rooted at `destination`.
pub fn tree_lines(layout: &Layout, destination: &Path) -> Vec<String> {
    let tree_root = build_tree(layout, destination);

    let mut lines = Vec::new();
    render_tree(&tree_root, "", true, &mut lines);

    lines
}

pub fn preview_as_tree(layout: &Layout, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file), {} = (marker)",
        "blue".blue(),
        "green".green(),
        "dimmed".dimmed()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    for line in tree_lines(layout, destination) {
        println!("{}", line);
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_lines(layout: &Layout) -> Vec<String> {
        colored::control::set_override(false);
        tree_lines(layout, Path::new("project"))
    }

    #[test]
    fn intermediate_directories_are_inferred() {
        let lines = plain_lines(&Layout::default());

        assert_eq!(lines[0], "└── project");
        assert!(lines.contains(&"    ├── data".to_string()));
        assert!(lines.contains(&"    │   ├── 01_raw".to_string()));
        assert!(lines.contains(&"    │   │   └── .gitkeep".to_string()));
    }

    #[test]
    fn each_path_appears_once() {
        let layout = Layout::new(
            ["reports/figures"],
            [("reports/summary.md", Some("# Summary"))],
        );

        let lines = plain_lines(&layout);

        assert_eq!(
            lines,
            vec![
                "└── project",
                "    └── reports",
                "        ├── figures",
                "        │   └── .gitkeep",
                "        └── summary.md",
            ]
        );
    }
}
