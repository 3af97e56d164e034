/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use astor_ast::{Node, NodeKind};

///Called by an inspector for every node of a tree.
///
/// The visitor is called once per node in pre-order. If it returns `true`, each child of the node is
/// inspected, followed by a *closing* call for the node, in which [Cursor::current] is `None`. If it
/// returns `false`, the children are skipped and there is no closing call.
///
/// Any `FnMut(&mut Cursor) -> bool` closure is a visitor.
pub trait Visitor {
    fn visit(&mut self, cursor: &mut Cursor<'_>) -> bool;
}

impl<F> Visitor for F
where
    F: FnMut(&mut Cursor<'_>) -> bool,
{
    fn visit(&mut self, cursor: &mut Cursor<'_>) -> bool {
        self(cursor)
    }
}

///Traversal context of a single visitor call.
///
/// Gives access to the node that is currently presented, and lets the visitor replace it. A replacement
/// is written into the parent's slot once the visitor returns. If the visitor asks for recursion, the
/// children of the *replacement* are inspected.
pub struct Cursor<'a> {
    node: Option<&'a mut Node>,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn open(node: &'a mut Node, depth: usize) -> Self {
        Cursor {
            node: Some(node),
            depth,
        }
    }

    pub(crate) fn closing(depth: usize) -> Self {
        Cursor { node: None, depth }
    }

    ///The node currently being inspected, `None` for the closing call.
    pub fn current(&self) -> Option<&Node> {
        self.node.as_deref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Node> {
        self.node.as_deref_mut()
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.current().map(Node::kind)
    }

    ///Replaces the node currently being inspected, and returns the node that was there before.
    ///
    /// Ignored during the closing call, since there is no slot left to update.
    pub fn replace(&mut self, node: impl Into<Node>) -> Option<Node> {
        match self.node.as_deref_mut() {
            Some(current) => Some(std::mem::replace(current, node.into())),
            None => {
                log::trace!("ignoring replacement in closing call at depth {}", self.depth);
                None
            }
        }
    }

    pub fn is_closing(&self) -> bool {
        self.node.is_none()
    }

    ///Nesting depth of the presented node. The root is at depth 0, the closing call has the depth of
    /// the node that is being closed.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

///Presents `node` to `visitor` and returns its recursion decision.
pub(crate) fn present<V: Visitor + ?Sized>(visitor: &mut V, node: &mut Node, depth: usize) -> bool {
    log::trace!("visit {} at depth {depth}", node.kind());
    visitor.visit(&mut Cursor::open(node, depth))
}

///Issues the closing call for a node at `depth`.
pub(crate) fn close<V: Visitor + ?Sized>(visitor: &mut V, depth: usize) {
    let _ = visitor.visit(&mut Cursor::closing(depth));
}
