/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Expressions and type expressions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    common::{BasicLit, ChanDir, FieldList, Ident, Pos, Token},
    stmt::BlockStmt,
};

///Placeholder for an expression that could not be parsed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BadExpr {
    pub from: Pos,
    pub to: Pos,
}

///`...` in parameter lists and array literals.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsis {
    pub ellipsis: Pos,
    pub elt: Option<Box<Expr>>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeLit {
    pub ty: Option<Box<Expr>>,
    pub lbrace: Pos,
    pub elts: Vec<Expr>,
    pub rbrace: Pos,
    ///True if source expressions are missing in `elts`.
    pub incomplete: bool,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ParenExpr {
    pub lparen: Pos,
    pub x: Box<Expr>,
    pub rparen: Pos,
}

///`x.sel`, also used for package qualified names.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorExpr {
    pub x: Box<Expr>,
    pub sel: Ident,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpr {
    pub x: Box<Expr>,
    pub lbrack: Pos,
    pub index: Box<Expr>,
    pub rbrack: Pos,
}

///`x[low:high]` or `x[low:high:max]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SliceExpr {
    pub x: Box<Expr>,
    pub lbrack: Pos,
    pub low: Option<Box<Expr>>,
    pub high: Option<Box<Expr>>,
    pub max: Option<Box<Expr>>,
    pub slice3: bool,
    pub rbrack: Pos,
}

///`x.(ty)`. `ty` is absent for the `x.(type)` form of a type switch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAssertExpr {
    pub x: Box<Expr>,
    pub lparen: Pos,
    pub ty: Option<Box<Expr>>,
    pub rparen: Pos,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub lparen: Pos,
    pub args: Vec<Expr>,
    ///Position of `...`, if any.
    pub ellipsis: Pos,
    pub rparen: Pos,
}

///Either a pointer type `*T` or a dereference `*x`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StarExpr {
    pub star: Pos,
    pub x: Box<Expr>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub op_pos: Pos,
    pub op: Token,
    pub x: Box<Expr>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub x: Box<Expr>,
    pub op_pos: Pos,
    pub op: Token,
    pub y: Box<Expr>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub colon: Pos,
    pub value: Box<Expr>,
}

///`[len]elt`, a slice type if `len` is absent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub lbrack: Pos,
    pub len: Option<Box<Expr>>,
    pub elt: Box<Expr>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StructType {
    pub struct_pos: Pos,
    pub fields: FieldList,
    pub incomplete: bool,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuncType {
    ///Position of the `func` keyword, [Pos::NONE] for method signatures in interfaces.
    pub func: Pos,
    pub params: Option<FieldList>,
    pub results: Option<FieldList>,
}

impl FuncType {
    pub fn new(params: FieldList, results: Option<FieldList>) -> Self {
        FuncType {
            func: Pos::NONE,
            params: Some(params),
            results,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub interface: Pos,
    pub methods: FieldList,
    pub incomplete: bool,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MapType {
    pub map: Pos,
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ChanType {
    pub begin: Pos,
    ///Position of `<-`, [Pos::NONE] if there is none.
    pub arrow: Pos,
    pub dir: ChanDir,
    pub value: Box<Expr>,
}

///All expression and type shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Bad(BadExpr),
    Ident(Ident),
    BasicLit(BasicLit),
    Ellipsis(Ellipsis),
    FuncLit(FuncLit),
    CompositeLit(CompositeLit),
    Paren(ParenExpr),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Slice(SliceExpr),
    TypeAssert(TypeAssertExpr),
    Call(CallExpr),
    Star(StarExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    KeyValue(KeyValueExpr),

    ArrayType(ArrayType),
    StructType(StructType),
    FuncType(FuncType),
    InterfaceType(InterfaceType),
    MapType(MapType),
    ChanType(ChanType),
}

impl Default for Expr {
    fn default() -> Self {
        Expr::Bad(BadExpr::default())
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident::new(name))
    }

    ///`x.sel`
    pub fn selector(x: Expr, sel: impl Into<String>) -> Self {
        Expr::Selector(SelectorExpr {
            x: Box::new(x),
            sel: Ident::new(sel),
        })
    }

    ///Package qualified identifier `pkg.name`.
    pub fn qualified(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Self::selector(Self::ident(pkg), name)
    }

    pub fn star(x: Expr) -> Self {
        Expr::Star(StarExpr {
            star: Pos::NONE,
            x: Box::new(x),
        })
    }

    pub fn paren(x: Expr) -> Self {
        Expr::Paren(ParenExpr {
            lparen: Pos::NONE,
            x: Box::new(x),
            rparen: Pos::NONE,
        })
    }

    pub fn unary(op: Token, x: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op_pos: Pos::NONE,
            op,
            x: Box::new(x),
        })
    }

    pub fn binary(x: Expr, op: Token, y: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            x: Box::new(x),
            op_pos: Pos::NONE,
            op,
            y: Box::new(y),
        })
    }

    pub fn call(fun: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call(CallExpr {
            fun: Box::new(fun),
            lparen: Pos::NONE,
            args: args.into_iter().collect(),
            ellipsis: Pos::NONE,
            rparen: Pos::NONE,
        })
    }

    pub fn lit(lit: BasicLit) -> Self {
        Expr::BasicLit(lit)
    }

    ///`[]elt`
    pub fn slice_of(elt: Expr) -> Self {
        Expr::ArrayType(ArrayType {
            lbrack: Pos::NONE,
            len: None,
            elt: Box::new(elt),
        })
    }

    pub fn map_of(key: Expr, value: Expr) -> Self {
        Expr::MapType(MapType {
            map: Pos::NONE,
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    pub fn as_ident(&self) -> Option<&Ident> {
        if let Expr::Ident(i) = self {
            Some(i)
        } else {
            None
        }
    }

    ///Removes any number of enclosing parentheses.
    pub fn unparen(&self) -> &Expr {
        let mut expr = self;
        while let Expr::Paren(p) = expr {
            expr = &p.x;
        }
        expr
    }
}
