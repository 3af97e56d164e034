/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! The polymorphic [Node] and the conversions between nodes and typed child slots.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    common::{BasicLit, Comment, CommentGroup, Field, FieldList, Ident},
    decl::{Decl, File, FuncDecl, Package, Spec},
    error::AstError,
    expr::{CallExpr, Expr, FuncType},
    stmt::{BlockStmt, Stmt},
};

///Any node of the tree, grouped by family.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Comment(Comment),
    CommentGroup(CommentGroup),
    Field(Field),
    FieldList(FieldList),
    Expr(Expr),
    Stmt(Stmt),
    Spec(Spec),
    Decl(Decl),
    File(File),
    Package(Package),
}

///Concrete shape of a node. One entry per grammar variant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Comment,
    CommentGroup,
    Field,
    FieldList,

    BadExpr,
    Ident,
    BasicLit,
    Ellipsis,
    FuncLit,
    CompositeLit,
    ParenExpr,
    SelectorExpr,
    IndexExpr,
    SliceExpr,
    TypeAssertExpr,
    CallExpr,
    StarExpr,
    UnaryExpr,
    BinaryExpr,
    KeyValueExpr,

    ArrayType,
    StructType,
    FuncType,
    InterfaceType,
    MapType,
    ChanType,

    BadStmt,
    DeclStmt,
    EmptyStmt,
    LabeledStmt,
    ExprStmt,
    SendStmt,
    IncDecStmt,
    AssignStmt,
    GoStmt,
    DeferStmt,
    ReturnStmt,
    BranchStmt,
    BlockStmt,
    IfStmt,
    CaseClause,
    SwitchStmt,
    TypeSwitchStmt,
    CommClause,
    SelectStmt,
    ForStmt,
    RangeStmt,

    ImportSpec,
    ValueSpec,
    TypeSpec,

    BadDecl,
    GenDecl,
    FuncDecl,

    File,
    Package,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Bad(_) => NodeKind::BadExpr,
            Expr::Ident(_) => NodeKind::Ident,
            Expr::BasicLit(_) => NodeKind::BasicLit,
            Expr::Ellipsis(_) => NodeKind::Ellipsis,
            Expr::FuncLit(_) => NodeKind::FuncLit,
            Expr::CompositeLit(_) => NodeKind::CompositeLit,
            Expr::Paren(_) => NodeKind::ParenExpr,
            Expr::Selector(_) => NodeKind::SelectorExpr,
            Expr::Index(_) => NodeKind::IndexExpr,
            Expr::Slice(_) => NodeKind::SliceExpr,
            Expr::TypeAssert(_) => NodeKind::TypeAssertExpr,
            Expr::Call(_) => NodeKind::CallExpr,
            Expr::Star(_) => NodeKind::StarExpr,
            Expr::Unary(_) => NodeKind::UnaryExpr,
            Expr::Binary(_) => NodeKind::BinaryExpr,
            Expr::KeyValue(_) => NodeKind::KeyValueExpr,
            Expr::ArrayType(_) => NodeKind::ArrayType,
            Expr::StructType(_) => NodeKind::StructType,
            Expr::FuncType(_) => NodeKind::FuncType,
            Expr::InterfaceType(_) => NodeKind::InterfaceType,
            Expr::MapType(_) => NodeKind::MapType,
            Expr::ChanType(_) => NodeKind::ChanType,
        }
    }
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Bad(_) => NodeKind::BadStmt,
            Stmt::Decl(_) => NodeKind::DeclStmt,
            Stmt::Empty(_) => NodeKind::EmptyStmt,
            Stmt::Labeled(_) => NodeKind::LabeledStmt,
            Stmt::Expr(_) => NodeKind::ExprStmt,
            Stmt::Send(_) => NodeKind::SendStmt,
            Stmt::IncDec(_) => NodeKind::IncDecStmt,
            Stmt::Assign(_) => NodeKind::AssignStmt,
            Stmt::Go(_) => NodeKind::GoStmt,
            Stmt::Defer(_) => NodeKind::DeferStmt,
            Stmt::Return(_) => NodeKind::ReturnStmt,
            Stmt::Branch(_) => NodeKind::BranchStmt,
            Stmt::Block(_) => NodeKind::BlockStmt,
            Stmt::If(_) => NodeKind::IfStmt,
            Stmt::CaseClause(_) => NodeKind::CaseClause,
            Stmt::Switch(_) => NodeKind::SwitchStmt,
            Stmt::TypeSwitch(_) => NodeKind::TypeSwitchStmt,
            Stmt::CommClause(_) => NodeKind::CommClause,
            Stmt::Select(_) => NodeKind::SelectStmt,
            Stmt::For(_) => NodeKind::ForStmt,
            Stmt::Range(_) => NodeKind::RangeStmt,
        }
    }
}

impl Spec {
    pub fn kind(&self) -> NodeKind {
        match self {
            Spec::Import(_) => NodeKind::ImportSpec,
            Spec::Value(_) => NodeKind::ValueSpec,
            Spec::Type(_) => NodeKind::TypeSpec,
        }
    }
}

impl Decl {
    pub fn kind(&self) -> NodeKind {
        match self {
            Decl::Bad(_) => NodeKind::BadDecl,
            Decl::Gen(_) => NodeKind::GenDecl,
            Decl::Func(_) => NodeKind::FuncDecl,
        }
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Comment(_) => NodeKind::Comment,
            Node::CommentGroup(_) => NodeKind::CommentGroup,
            Node::Field(_) => NodeKind::Field,
            Node::FieldList(_) => NodeKind::FieldList,
            Node::Expr(e) => e.kind(),
            Node::Stmt(s) => s.kind(),
            Node::Spec(s) => s.kind(),
            Node::Decl(d) => d.kind(),
            Node::File(_) => NodeKind::File,
            Node::Package(_) => NodeKind::Package,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Node::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_expr_mut(&mut self) -> Option<&mut Expr> {
        match self {
            Node::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_stmt(&self) -> Option<&Stmt> {
        match self {
            Node::Stmt(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_stmt_mut(&mut self) -> Option<&mut Stmt> {
        match self {
            Node::Stmt(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_decl(&self) -> Option<&Decl> {
        match self {
            Node::Decl(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_decl_mut(&mut self) -> Option<&mut Decl> {
        match self {
            Node::Decl(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_ident(&self) -> Option<&Ident> {
        self.as_expr().and_then(Expr::as_ident)
    }

    pub fn as_ident_mut(&mut self) -> Option<&mut Ident> {
        match self {
            Node::Expr(Expr::Ident(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_func_decl(&self) -> Option<&FuncDecl> {
        match self {
            Node::Decl(Decl::Func(f)) => Some(f),
            _ => None,
        }
    }

    pub fn as_func_decl_mut(&mut self) -> Option<&mut FuncDecl> {
        match self {
            Node::Decl(Decl::Func(f)) => Some(f),
            _ => None,
        }
    }
}

///A type that can occupy a child slot of the tree.
///
/// Every child is handed to a visitor as a [Node]. After visiting, the (possibly replaced) node must
/// be converted back into the slot's type, which fails if a visitor installed a node of another shape.
pub trait Syntax: Sized {
    ///Name of the slot type, used in [AstError::SlotMismatch].
    const SLOT: &'static str;

    fn into_node(self) -> Node;
    fn from_node(node: Node) -> Result<Self, AstError>;
}

impl Syntax for Node {
    const SLOT: &'static str = "Node";

    fn into_node(self) -> Node {
        self
    }

    fn from_node(node: Node) -> Result<Self, AstError> {
        Ok(node)
    }
}

fn mismatch<T: Syntax>(found: &Node) -> AstError {
    AstError::SlotMismatch {
        expected: T::SLOT,
        found: found.kind(),
    }
}

///Implements [Syntax] for types that are a family variant of [Node].
macro_rules! impl_family {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }

            impl Syntax for $ty {
                const SLOT: &'static str = stringify!($ty);

                fn into_node(self) -> Node {
                    Node::$ty(self)
                }

                fn from_node(node: Node) -> Result<Self, AstError> {
                    match node {
                        Node::$ty(value) => Ok(value),
                        other => Err(mismatch::<Self>(&other)),
                    }
                }
            }
        )*
    };
}

///Implements [Syntax] for concrete shapes that live inside a family, for instance [Ident] as
/// `Node::Expr(Expr::Ident(_))`.
macro_rules! impl_member {
    ($($ty:ident => $family:ident :: $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$family($family::$variant(value))
                }
            }

            impl Syntax for $ty {
                const SLOT: &'static str = stringify!($ty);

                fn into_node(self) -> Node {
                    Node::$family($family::$variant(self))
                }

                fn from_node(node: Node) -> Result<Self, AstError> {
                    match node {
                        Node::$family($family::$variant(value)) => Ok(value),
                        other => Err(mismatch::<Self>(&other)),
                    }
                }
            }
        )*
    };
}

impl_family!(
    Comment,
    CommentGroup,
    Field,
    FieldList,
    Expr,
    Stmt,
    Spec,
    Decl,
    File,
    Package,
);

impl_member!(
    Ident => Expr::Ident,
    BasicLit => Expr::BasicLit,
    FuncType => Expr::FuncType,
    CallExpr => Expr::Call,
    BlockStmt => Stmt::Block,
    FuncDecl => Decl::Func,
);
