/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Statements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    common::{Ident, Pos, Token},
    decl::Decl,
    expr::{CallExpr, Expr},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BadStmt {
    pub from: Pos,
    pub to: Pos,
}

///Declaration inside a function body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DeclStmt {
    pub decl: Box<Decl>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyStmt {
    pub semicolon: Pos,
    ///True if the semicolon was inserted by the lexer.
    pub implicit: bool,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledStmt {
    pub label: Ident,
    pub colon: Pos,
    pub stmt: Box<Stmt>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ExprStmt {
    pub x: Expr,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SendStmt {
    pub chan: Expr,
    pub arrow: Pos,
    pub value: Expr,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IncDecStmt {
    pub x: Expr,
    pub tok_pos: Pos,
    ///[Token::Inc] or [Token::Dec]
    pub tok: Token,
}

///Assignment or short variable declaration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub tok_pos: Pos,
    pub tok: Token,
    pub rhs: Vec<Expr>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GoStmt {
    pub go: Pos,
    pub call: CallExpr,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DeferStmt {
    pub defer: Pos,
    pub call: CallExpr,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    pub return_pos: Pos,
    pub results: Vec<Expr>,
}

///`break`, `continue`, `goto` or `fallthrough`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BranchStmt {
    pub tok_pos: Pos,
    pub tok: Token,
    pub label: Option<Ident>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockStmt {
    pub lbrace: Pos,
    pub list: Vec<Stmt>,
    pub rbrace: Pos,
}

impl BlockStmt {
    pub fn new(list: impl IntoIterator<Item = Stmt>) -> Self {
        BlockStmt {
            lbrace: Pos::NONE,
            list: list.into_iter().collect(),
            rbrace: Pos::NONE,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub if_pos: Pos,
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: BlockStmt,
    ///Either another [IfStmt] or a [BlockStmt].
    pub else_branch: Option<Box<Stmt>>,
}

///Case of an expression or type switch. An empty `list` is the `default` case.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CaseClause {
    pub case: Pos,
    pub list: Vec<Expr>,
    pub colon: Pos,
    pub body: Vec<Stmt>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStmt {
    pub switch: Pos,
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    ///Only [CaseClause]s.
    pub body: BlockStmt,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TypeSwitchStmt {
    pub switch: Pos,
    pub init: Option<Box<Stmt>>,
    ///`x := y.(type)` or `y.(type)`
    pub assign: Box<Stmt>,
    pub body: BlockStmt,
}

///Case of a select statement. An absent `comm` is the `default` case.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CommClause {
    pub case: Pos,
    pub comm: Option<Box<Stmt>>,
    pub colon: Pos,
    pub body: Vec<Stmt>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStmt {
    pub select: Pos,
    ///Only [CommClause]s.
    pub body: BlockStmt,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ForStmt {
    pub for_pos: Pos,
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: BlockStmt,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RangeStmt {
    pub for_pos: Pos,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub tok_pos: Pos,
    ///[Token::Illegal] if there is no key.
    pub tok: Token,
    pub x: Expr,
    pub body: BlockStmt,
}

///All statement shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Bad(BadStmt),
    Decl(DeclStmt),
    Empty(EmptyStmt),
    Labeled(LabeledStmt),
    Expr(ExprStmt),
    Send(SendStmt),
    IncDec(IncDecStmt),
    Assign(AssignStmt),
    Go(GoStmt),
    Defer(DeferStmt),
    Return(ReturnStmt),
    Branch(BranchStmt),
    Block(BlockStmt),
    If(IfStmt),
    CaseClause(CaseClause),
    Switch(SwitchStmt),
    TypeSwitch(TypeSwitchStmt),
    CommClause(CommClause),
    Select(SelectStmt),
    For(ForStmt),
    Range(RangeStmt),
}

impl Default for Stmt {
    fn default() -> Self {
        Stmt::Empty(EmptyStmt::default())
    }
}

impl Stmt {
    pub fn expr(x: Expr) -> Self {
        Stmt::Expr(ExprStmt { x })
    }

    pub fn ret(results: impl IntoIterator<Item = Expr>) -> Self {
        Stmt::Return(ReturnStmt {
            return_pos: Pos::NONE,
            results: results.into_iter().collect(),
        })
    }

    ///`lhs tok rhs`, for instance `a, b := f()`.
    pub fn assign(
        lhs: impl IntoIterator<Item = Expr>,
        tok: Token,
        rhs: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Stmt::Assign(AssignStmt {
            lhs: lhs.into_iter().collect(),
            tok_pos: Pos::NONE,
            tok,
            rhs: rhs.into_iter().collect(),
        })
    }

    pub fn block(list: impl IntoIterator<Item = Stmt>) -> Self {
        Stmt::Block(BlockStmt::new(list))
    }
}
