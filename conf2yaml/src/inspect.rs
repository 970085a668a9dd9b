use ios_conf_core::{ConfigNode, ConfigTree};

/// Render a config tree with a configurable max depth.
pub fn render_tree(tree: &ConfigTree, max_depth: usize) -> String {
    let mut out = String::new();
    for node in &tree.nodes {
        render_node(node, 0, max_depth, &mut out);
    }
    out
}

fn render_node(node: &ConfigNode, depth: usize, max_depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{}{}\n", indent, node.text.trim_start()));

    if depth >= max_depth {
        return;
    }

    for child in &node.children {
        render_node(child, depth + 1, max_depth, out);
    }
}

#[cfg(test)]
mod tests {
    use ios_conf_core::parse;
    use pretty_assertions::assert_eq;

    use super::render_tree;

    #[test]
    fn renders_nested_statements_with_two_space_steps() {
        let tree = parse("interface Vlan10\n ip address 172.16.10.5 255.255.255.0\nvlan 10\n");

        assert_eq!(
            render_tree(&tree, 3),
            "interface Vlan10\n  ip address 172.16.10.5 255.255.255.0\nvlan 10\n"
        );
    }

    #[test]
    fn max_depth_zero_hides_children() {
        let tree = parse("interface Vlan10\n shutdown\n");

        assert_eq!(render_tree(&tree, 0), "interface Vlan10\n");
    }
}
