/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use std::sync::{Mutex, PoisonError};

use astor_ast::{Node, Syntax};

use crate::{
    dispatch::{Driver, Walker},
    visitor::{close, present, Cursor, Visitor},
    InspectError,
};

///Walks a tree, calling its [Visitor] for each node, and returns the (possibly rewritten) tree.
///
/// The inspector holds no state between walks and can be reused for any number of trees.
///
/// ```
/// use astor::{Cursor, Inspector};
/// use astor_ast::{Expr, Node};
///
/// let mut idents = 0;
/// let mut inspector = Inspector::from_fn(|cursor: &mut Cursor| {
///     if cursor.current().and_then(Node::as_ident).is_some() {
///         idents += 1;
///     }
///     true
/// });
/// let tree = inspector.inspect(Expr::selector(Expr::ident("fmt"), "Println"));
/// assert_eq!(tree, Expr::qualified("fmt", "Println"));
/// drop(inspector);
/// assert_eq!(idents, 2);
/// ```
pub struct Inspector<V> {
    visitor: V,
}

impl<F> Inspector<F>
where
    F: FnMut(&mut Cursor<'_>) -> bool,
{
    ///Creates an inspector for a closure visitor.
    pub fn from_fn(f: F) -> Self {
        Inspector { visitor: f }
    }
}

impl<V: Visitor> Inspector<V> {
    pub fn new(visitor: V) -> Self {
        Inspector { visitor }
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    ///Mutable access to the visitor between walks, for instance to reset state it collected.
    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    ///Calls the visitor once for `node` and returns the node that should occupy its slot, as well as
    /// whether its children should be inspected.
    ///
    /// `None` issues a closing call. Its result is always `(None, false)`.
    pub fn visit(&mut self, node: Option<Node>) -> (Option<Node>, bool) {
        match node {
            Some(node) => {
                let (node, recurse) = self.enter(node, 0);
                (Some(node), recurse)
            }
            None => {
                self.leave(0);
                (None, false)
            }
        }
    }

    ///Inspects the whole tree below `root`.
    ///
    /// # Panics
    ///
    /// If the visitor installed a replacement that does not fit its slot. See [Self::try_inspect].
    pub fn inspect<T: Syntax>(&mut self, root: T) -> T {
        fatal(self.try_inspect(root))
    }

    ///Inspects the whole tree below `root`, or returns an error if the visitor installed a node that does
    /// not fit its slot.
    pub fn try_inspect<T: Syntax>(&mut self, root: T) -> Result<T, InspectError> {
        Walker::new(self).slot(root)
    }
}

impl<V: Visitor> Driver for Inspector<V> {
    fn enter(&mut self, mut node: Node, depth: usize) -> (Node, bool) {
        let recurse = present(&mut self.visitor, &mut node, depth);
        (node, recurse)
    }

    fn leave(&mut self, depth: usize) {
        close(&mut self.visitor, depth)
    }
}

///Inspector that can be shared between threads.
///
/// The visitor sits behind a mutex that is taken for every single visitor call, so walks that run
/// concurrently on the same instance interleave their calls. Each walk still sees its own nodes in
/// order, but a visitor that keeps state across calls sees the interleaving as well.
pub struct SyncInspector<V> {
    visitor: Mutex<V>,
}

impl<F> SyncInspector<F>
where
    F: FnMut(&mut Cursor<'_>) -> bool,
{
    pub fn from_fn(f: F) -> Self {
        SyncInspector {
            visitor: Mutex::new(f),
        }
    }
}

impl<V: Visitor> SyncInspector<V> {
    pub fn new(visitor: V) -> Self {
        SyncInspector {
            visitor: Mutex::new(visitor),
        }
    }

    pub fn into_visitor(self) -> V {
        self.visitor
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    ///See [Inspector::visit].
    pub fn visit(&self, node: Option<Node>) -> (Option<Node>, bool) {
        let mut locked = Locked(&self.visitor);
        match node {
            Some(node) => {
                let (node, recurse) = locked.enter(node, 0);
                (Some(node), recurse)
            }
            None => {
                locked.leave(0);
                (None, false)
            }
        }
    }

    ///See [Inspector::inspect].
    pub fn inspect<T: Syntax>(&self, root: T) -> T {
        fatal(self.try_inspect(root))
    }

    ///See [Inspector::try_inspect].
    pub fn try_inspect<T: Syntax>(&self, root: T) -> Result<T, InspectError> {
        Walker::new(&mut Locked(&self.visitor)).slot(root)
    }
}

///Driver that locks the shared visitor for the duration of one call.
struct Locked<'a, V>(&'a Mutex<V>);

impl<V: Visitor> Driver for Locked<'_, V> {
    fn enter(&mut self, mut node: Node, depth: usize) -> (Node, bool) {
        let mut visitor = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        let recurse = present(&mut *visitor, &mut node, depth);
        (node, recurse)
    }

    fn leave(&mut self, depth: usize) {
        let mut visitor = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        close(&mut *visitor, depth)
    }
}

///Aborts the inspection loudly. A node that does not fit its slot means the visitor broke the tree, there
/// is no sensible way to continue from there.
fn fatal<T>(result: Result<T, InspectError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("inspection aborted: {err}");
            panic!("astor::inspect: {err}");
        }
    }
}
