/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Leaf data and the small node types shared by all other parts of the tree.

use std::fmt::Display;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::expr::Expr;

///Compact source position. Offsets are owned by whoever produced the tree, the inspector never
/// interprets them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(pub u32);

impl Pos {
    ///Position of synthesized nodes.
    pub const NONE: Pos = Pos(0);

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

///Operator and keyword tokens that appear as leaf data on expressions, statements and declarations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Token {
    #[default]
    Illegal,

    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,

    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    AndNotAssign,

    LAnd,
    LOr,
    Arrow,
    Inc,
    Dec,

    Eql,
    Lss,
    Gtr,
    Assign,
    Not,
    Neq,
    Leq,
    Geq,
    Define,
    Tilde,

    Break,
    Continue,
    Goto,
    Fallthrough,

    Import,
    Const,
    Type,
    Var,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Token::Illegal => "ILLEGAL",
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Quo => "/",
            Token::Rem => "%",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::AndNot => "&^",
            Token::AddAssign => "+=",
            Token::SubAssign => "-=",
            Token::MulAssign => "*=",
            Token::QuoAssign => "/=",
            Token::RemAssign => "%=",
            Token::AndAssign => "&=",
            Token::OrAssign => "|=",
            Token::XorAssign => "^=",
            Token::ShlAssign => "<<=",
            Token::ShrAssign => ">>=",
            Token::AndNotAssign => "&^=",
            Token::LAnd => "&&",
            Token::LOr => "||",
            Token::Arrow => "<-",
            Token::Inc => "++",
            Token::Dec => "--",
            Token::Eql => "==",
            Token::Lss => "<",
            Token::Gtr => ">",
            Token::Assign => "=",
            Token::Not => "!",
            Token::Neq => "!=",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::Define => ":=",
            Token::Tilde => "~",
            Token::Break => "break",
            Token::Continue => "continue",
            Token::Goto => "goto",
            Token::Fallthrough => "fallthrough",
            Token::Import => "import",
            Token::Const => "const",
            Token::Type => "type",
            Token::Var => "var",
        };
        write!(f, "{s}")
    }
}

///Kind of a [BasicLit].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LitKind {
    #[default]
    Int,
    Float,
    Imag,
    Char,
    String,
}

///Direction of a channel type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Send,
    Recv,
    #[default]
    Both,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name_pos: Pos,
    pub name: String,
}

impl Ident {
    ///Creates an identifier without position information.
    pub fn new(name: impl Into<String>) -> Self {
        Ident {
            name_pos: Pos::NONE,
            name: name.into(),
        }
    }

    pub fn at(name_pos: Pos, name: impl Into<String>) -> Self {
        Ident {
            name_pos,
            name: name.into(),
        }
    }

    ///True for the blank identifier `_`.
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }

    ///True if the name starts with an upper case letter.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

///Literal of basic type. `value` keeps the literal exactly as written, including quotes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BasicLit {
    pub value_pos: Pos,
    pub kind: LitKind,
    pub value: String,
}

impl BasicLit {
    pub fn new(kind: LitKind, value: impl Into<String>) -> Self {
        BasicLit {
            value_pos: Pos::NONE,
            kind,
            value: value.into(),
        }
    }

    ///Quoted string literal for `content`.
    pub fn string(content: &str) -> Self {
        Self::new(LitKind::String, format!("{content:?}"))
    }

    pub fn int(value: i64) -> Self {
        Self::new(LitKind::Int, value.to_string())
    }
}

///A single `//` or `/* */` comment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Comment {
    pub slash: Pos,
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Comment {
            slash: Pos::NONE,
            text: text.into(),
        }
    }
}

///Sequence of comments without other tokens or empty lines between them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CommentGroup {
    pub list: SmallVec<[Comment; 2]>,
}

impl CommentGroup {
    pub fn new(list: impl IntoIterator<Item = Comment>) -> Self {
        CommentGroup {
            list: list.into_iter().collect(),
        }
    }

    ///Text of the group with comment markers removed, one line per comment.
    pub fn text(&self) -> String {
        let mut lines = Vec::with_capacity(self.list.len());
        for c in &self.list {
            let stripped = if let Some(line) = c.text.strip_prefix("//") {
                line
            } else if let Some(block) = c
                .text
                .strip_prefix("/*")
                .and_then(|t| t.strip_suffix("*/"))
            {
                block
            } else {
                c.text.as_str()
            };
            lines.push(stripped.trim());
        }
        lines.join("\n")
    }
}

pub type IdentList = SmallVec<[Ident; 2]>;

///Parameter, result, struct field or interface method declaration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    ///Empty for anonymous parameters and embedded fields.
    pub names: IdentList,
    pub ty: Box<Expr>,
    pub tag: Option<BasicLit>,
    pub comment: Option<CommentGroup>,
}

impl Field {
    pub fn new(names: impl IntoIterator<Item = Ident>, ty: Expr) -> Self {
        Field {
            doc: None,
            names: names.into_iter().collect(),
            ty: Box::new(ty),
            tag: None,
            comment: None,
        }
    }
}

///Parenthesized or braced list of [Field]s.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldList {
    pub opening: Pos,
    pub list: Vec<Field>,
    pub closing: Pos,
}

impl FieldList {
    pub fn new(list: impl IntoIterator<Item = Field>) -> Self {
        FieldList {
            opening: Pos::NONE,
            list: list.into_iter().collect(),
            closing: Pos::NONE,
        }
    }

    ///Number of declared names, counting anonymous fields as one.
    pub fn num_fields(&self) -> usize {
        self.list.iter().map(|f| f.names.len().max(1)).sum()
    }
}
