/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! # Astor
//!
//! Walks a Go syntax tree ([astor_ast]) with a single visitor, which may replace the node it is looking at.
//!
//! The visitor is called for every node in document order. It can inspect the node through the [Cursor],
//! swap it for another node with [Cursor::replace] and decide whether the children of the (new) node
//! should be visited as well. After all children of a node are done, the visitor is called once more
//! with no current node, which marks the end of that subtree.
//!
//! ```
//! use astor::{Cursor, Inspector};
//! use astor_ast::{BlockStmt, Decl, File, FieldList, FuncDecl, FuncType, Ident, Node};
//!
//! let file = File::new(
//!     "widgets",
//!     [Decl::Func(FuncDecl::new(
//!         "Widget",
//!         FuncType::new(FieldList::default(), None),
//!         Some(BlockStmt::default()),
//!     ))],
//! );
//!
//! let mut inspector = Inspector::from_fn(|cursor: &mut Cursor| {
//!     if let Some(func) = cursor.current_mut().and_then(Node::as_func_decl_mut) {
//!         func.name = Ident::new(format!("Foo{}", func.name));
//!     }
//!     true
//! });
//!
//! let file = inspector.inspect(file);
//! let Decl::Func(func) = &file.decls[0] else { unreachable!() };
//! assert_eq!(func.name.name, "FooWidget");
//! ```
//!
//! Children are only walked if the visitor returns `true` for their parent. Returning `false` also skips
//! the closing call of that node.
//!
//! A replacement has to fit the slot it is installed in: any expression can replace an expression,
//! but the name of a function can only ever be an identifier. A mismatching replacement aborts the
//! walk, see [Inspector::try_inspect].

mod dispatch;
mod error;
mod inspector;
mod lists;
mod visitor;

pub use error::{InspectError, BACKTRACE_ENV};
pub use inspector::{Inspector, SyncInspector};
pub use visitor::{Cursor, Visitor};

pub use astor_ast as ast;
