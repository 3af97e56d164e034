/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! # Astor-AST
//!
//! Owned syntax tree of the Go language, modelled after the node set of `go/ast`.
//!
//! The tree is produced by some external parser (or by hand, see the small constructors on most types)
//! and consumed by the `astor` inspector, which walks and rewrites it.
//!
//! There are two levels of typing:
//!
//! - the *families* [Expr], [Stmt], [Spec] and [Decl], which are closed enums of concrete shapes,
//! - the polymorphic [Node], which can hold any family, as well as the few node types that are not part
//!   of a family ([Comment], [CommentGroup], [Field], [FieldList], [File] and [Package]).
//!
//! Child fields are typed as narrowly as the grammar allows. Some slots only accept a single concrete
//! shape of a family, for instance the name of a [FuncDecl] is always an [Ident]. The [Syntax] trait
//! converts between slot types and [Node], and reports an [AstError] if a node does not fit.

pub mod common;
pub mod decl;
pub mod error;
pub mod expr;
pub mod node;
pub mod stmt;

pub use common::{
    BasicLit, ChanDir, Comment, CommentGroup, Field, FieldList, Ident, IdentList, LitKind, Pos,
    Token,
};
pub use decl::{
    BadDecl, Decl, File, FuncDecl, GenDecl, ImportSpec, Package, Spec, TypeSpec, ValueSpec,
};
pub use error::AstError;
pub use expr::{
    ArrayType, BadExpr, BinaryExpr, CallExpr, ChanType, CompositeLit, Ellipsis, Expr, FuncLit,
    FuncType, IndexExpr, InterfaceType, KeyValueExpr, MapType, ParenExpr, SelectorExpr, SliceExpr,
    StarExpr, StructType, TypeAssertExpr, UnaryExpr,
};
pub use node::{Node, NodeKind, Syntax};
pub use stmt::{
    AssignStmt, BadStmt, BlockStmt, BranchStmt, CaseClause, CommClause, DeclStmt, DeferStmt,
    EmptyStmt, ExprStmt, ForStmt, GoStmt, IfStmt, IncDecStmt, LabeledStmt, RangeStmt, ReturnStmt,
    SelectStmt, SendStmt, Stmt, SwitchStmt, TypeSwitchStmt,
};
