pub mod forsum;
pub mod forview;

use crate::base;

/// Renders as an indented outline. Children of the root print flush left;
/// deeper levels get branch prefixes from the charset.
pub struct Tree<'a> {
    pub(crate) charset: &'a base::Charset,
    pub(crate) root: Node,
}

#[derive(Default)]
pub(crate) struct Node {
    pub(crate) data: std::borrow::Cow<'static, str>,
    pub(crate) children: Vec<Self>,
}

impl Node {
    pub(crate) fn new(data: std::borrow::Cow<'static, str>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }
}

/// Returns the last child of `node`, adding one with `data` first unless the
/// current last child already carries it.
pub(crate) fn last_child_with<'n>(node: &'n mut Node, data: &str) -> &'n mut Node {
    let exists = node.children.last().is_some_and(|c| c.data == data);
    if !exists {
        node.children.push(Node::new(data.to_string().into()));
    }
    node.children
        .last_mut()
        .expect("a child should exist at this point")
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            is_last_child_of_parent: bool,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            let (prefix_tail, child_prefix_tail) = if is_last_child_of_parent {
                (charset.tree_corner, charset.tree_space)
            } else {
                (charset.tree_sideways_t, charset.tree_pipe_gap)
            };
            writeln!(f, "{}{}{}", preprefix, prefix_tail, node.data)?;
            preprefix.push_str(child_prefix_tail);
            for (i, child) in node.children.iter().enumerate() {
                write_node(child, f, preprefix, i + 1 == node.children.len(), charset)?;
            }
            preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            Ok(())
        }

        let mut preprefix = String::new();
        for lv1 in self.root.children.iter() {
            writeln!(f, "{}", lv1.data)?;
            for (i, lv2) in lv1.children.iter().enumerate() {
                write_node(
                    lv2,
                    f,
                    &mut preprefix,
                    i + 1 == lv1.children.len(),
                    self.charset,
                )?;
            }
        }
        Ok(())
    }
}
