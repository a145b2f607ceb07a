//! WordprocessingML lookup helpers over `roxmltree` nodes.

use roxmltree::Node;

pub(crate) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// First child element `w:{name}`.
pub(crate) fn wml<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name((WML_NS, name)))
}

/// `w:val` of the child element `w:{child}`.
pub(crate) fn wml_attr<'a, 'input>(node: Node<'a, 'input>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

/// Toggle property such as `w:b` or `w:i`. A missing `w:val` means on.
pub(crate) fn wml_toggle(node: Node<'_, '_>, name: &str) -> Option<bool> {
    wml(node, name).map(|n| {
        n.attribute((WML_NS, "val"))
            .map_or(true, |v| !matches!(v, "0" | "false" | "off"))
    })
}

pub(crate) fn is_wml(node: &Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(WML_NS)
}
