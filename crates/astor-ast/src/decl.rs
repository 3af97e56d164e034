/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Specs, declarations and the two container nodes, [File] and [Package].

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    common::{BasicLit, CommentGroup, FieldList, Ident, IdentList, Pos, Token},
    expr::{Expr, FuncType},
    stmt::BlockStmt,
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportSpec {
    pub doc: Option<CommentGroup>,
    ///Local package name, including `.` and `_`.
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub comment: Option<CommentGroup>,
    pub end_pos: Pos,
}

impl ImportSpec {
    pub fn new(path: &str) -> Self {
        ImportSpec {
            path: BasicLit::string(path),
            ..Default::default()
        }
    }
}

///Constant or variable declaration, `names [ty] [= values]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueSpec {
    pub doc: Option<CommentGroup>,
    pub names: IdentList,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub comment: Option<CommentGroup>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    ///Position of `=` for alias declarations.
    pub assign: Pos,
    pub ty: Expr,
    pub comment: Option<CommentGroup>,
}

///Single entry of a [GenDecl].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BadDecl {
    pub from: Pos,
    pub to: Pos,
}

///`import`, `const`, `type` or `var` declaration, parenthesized or not.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GenDecl {
    pub doc: Option<CommentGroup>,
    pub tok_pos: Pos,
    pub tok: Token,
    ///[Pos::NONE] if the declaration is not parenthesized.
    pub lparen: Pos,
    pub specs: Vec<Spec>,
    pub rparen: Pos,
}

impl GenDecl {
    pub fn new(tok: Token, specs: impl IntoIterator<Item = Spec>) -> Self {
        GenDecl {
            doc: None,
            tok_pos: Pos::NONE,
            tok,
            lparen: Pos::NONE,
            specs: specs.into_iter().collect(),
            rparen: Pos::NONE,
        }
    }
}

///Function or method declaration. `body` is absent for external functions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    pub body: Option<BlockStmt>,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>, ty: FuncType, body: Option<BlockStmt>) -> Self {
        FuncDecl {
            doc: None,
            recv: None,
            name: Ident::new(name),
            ty,
            body,
        }
    }

    pub fn is_method(&self) -> bool {
        self.recv.is_some()
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Decl {
    Bad(BadDecl),
    Gen(GenDecl),
    Func(FuncDecl),
}

impl Default for Decl {
    fn default() -> Self {
        Decl::Bad(BadDecl::default())
    }
}

///A single Go source file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct File {
    pub doc: Option<CommentGroup>,
    pub package: Pos,
    pub name: Ident,
    pub decls: Vec<Decl>,
    ///Every comment group of the file in source order, including the ones that are already
    /// attached to nodes as `doc` or `comment`.
    pub comments: Vec<CommentGroup>,
}

impl File {
    pub fn new(name: impl Into<String>, decls: impl IntoIterator<Item = Decl>) -> Self {
        File {
            doc: None,
            package: Pos::NONE,
            name: Ident::new(name),
            decls: decls.into_iter().collect(),
            comments: Vec::new(),
        }
    }

    ///Iterates all import specs of the file's import declarations.
    pub fn imports(&self) -> impl Iterator<Item = &ImportSpec> {
        self.decls
            .iter()
            .filter_map(|d| match d {
                Decl::Gen(g) if g.tok == Token::Import => Some(g.specs.iter()),
                _ => None,
            })
            .flatten()
            .filter_map(|s| match s {
                Spec::Import(i) => Some(i),
                _ => None,
            })
    }
}

///Set of files that form one package. Files are kept in file name order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Package {
    pub name: String,
    pub files: BTreeMap<String, File>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, file_name: impl Into<String>, file: File) -> Self {
        self.files.insert(file_name.into(), file);
        self
    }
}
