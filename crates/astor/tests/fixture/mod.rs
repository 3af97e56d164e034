/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Hand built trees shared by the integration tests. Each builder notes the Go source it stands for.
#![allow(dead_code)]

use astor::{ast::*, Cursor};
use smallvec::smallvec;

///Installs the logger once, `RUST_LOG=trace` shows every visit.
pub fn init_log() {
    let _ = pretty_env_logger::try_init();
}

///```go
///package widgets
///
///func <name>(a int) int {
///	return a + 1
///}
///```
pub fn widget_func(name: &str) -> File {
    File::new(
        "widgets",
        [Decl::Func(FuncDecl::new(
            name,
            FuncType::new(
                FieldList::new([Field::new([Ident::new("a")], Expr::ident("int"))]),
                None,
            ),
            Some(BlockStmt::new([Stmt::ret([Expr::binary(
                Expr::ident("a"),
                Token::Add,
                Expr::lit(BasicLit::int(1)),
            )])])),
        ))],
    )
}

///```go
///// Package widgets does things.
///package widgets
///
///import "fmt"
///
///// Widget is a thing.
///type Widget struct {
///	Name string `json:"name"`
///}
///
///var count, total int = 1, 2
///
///func (w *Widget) Describe(prefix string) (string, error) {
///	if w == nil {
///		return "", fmt.Errorf("nil")
///	}
///	for i := 0; i < count; i++ {
///		total += i
///	}
///	return prefix + w.Name, nil
///}
///```
pub fn widget_file() -> File {
    let pkg_doc = CommentGroup::new([Comment::new("// Package widgets does things.")]);
    let type_doc = CommentGroup::new([Comment::new("// Widget is a thing.")]);

    let import = Decl::Gen(GenDecl::new(
        Token::Import,
        [Spec::Import(ImportSpec::new("fmt"))],
    ));

    let mut name_field = Field::new([Ident::new("Name")], Expr::ident("string"));
    name_field.tag = Some(BasicLit::new(LitKind::String, "`json:\"name\"`"));
    let widget_type = Decl::Gen(GenDecl {
        doc: Some(type_doc.clone()),
        ..GenDecl::new(
            Token::Type,
            [Spec::Type(TypeSpec {
                doc: None,
                name: Ident::new("Widget"),
                assign: Pos::NONE,
                ty: Expr::StructType(StructType {
                    struct_pos: Pos::NONE,
                    fields: FieldList::new([name_field]),
                    incomplete: false,
                }),
                comment: None,
            })],
        )
    });

    let vars = Decl::Gen(GenDecl::new(
        Token::Var,
        [Spec::Value(ValueSpec {
            names: smallvec![Ident::new("count"), Ident::new("total")],
            ty: Some(Expr::ident("int")),
            values: vec![Expr::lit(BasicLit::int(1)), Expr::lit(BasicLit::int(2))],
            ..Default::default()
        })],
    ));

    let nil_check = Stmt::If(IfStmt {
        if_pos: Pos::NONE,
        init: None,
        cond: Expr::binary(Expr::ident("w"), Token::Eql, Expr::ident("nil")),
        body: BlockStmt::new([Stmt::ret([
            Expr::lit(BasicLit::string("")),
            Expr::call(
                Expr::qualified("fmt", "Errorf"),
                [Expr::lit(BasicLit::string("nil"))],
            ),
        ])]),
        else_branch: None,
    });

    let sum_loop = Stmt::For(ForStmt {
        for_pos: Pos::NONE,
        init: Some(Box::new(Stmt::assign(
            [Expr::ident("i")],
            Token::Define,
            [Expr::lit(BasicLit::int(0))],
        ))),
        cond: Some(Expr::binary(
            Expr::ident("i"),
            Token::Lss,
            Expr::ident("count"),
        )),
        post: Some(Box::new(Stmt::IncDec(IncDecStmt {
            x: Expr::ident("i"),
            tok_pos: Pos::NONE,
            tok: Token::Inc,
        }))),
        body: BlockStmt::new([Stmt::assign(
            [Expr::ident("total")],
            Token::AddAssign,
            [Expr::ident("i")],
        )]),
    });

    let describe = Decl::Func(FuncDecl {
        doc: None,
        recv: Some(FieldList::new([Field::new(
            [Ident::new("w")],
            Expr::star(Expr::ident("Widget")),
        )])),
        name: Ident::new("Describe"),
        ty: FuncType::new(
            FieldList::new([Field::new([Ident::new("prefix")], Expr::ident("string"))]),
            Some(FieldList::new([
                Field::new([], Expr::ident("string")),
                Field::new([], Expr::ident("error")),
            ])),
        ),
        body: Some(BlockStmt::new([
            nil_check,
            sum_loop,
            Stmt::ret([
                Expr::binary(
                    Expr::ident("prefix"),
                    Token::Add,
                    Expr::selector(Expr::ident("w"), "Name"),
                ),
                Expr::ident("nil"),
            ]),
        ])),
    });

    File {
        doc: Some(pkg_doc.clone()),
        package: Pos::NONE,
        name: Ident::new("widgets"),
        decls: vec![import, widget_type, vars, describe],
        comments: vec![pkg_doc, type_doc],
    }
}

///`pointer` stands in for each of the three `*Widget` occurrences.
///
///```go
///package widgets
///
///func NewWidget(parent *Widget) *Widget {
///	var w *Widget
///	return w
///}
///```
pub fn pointer_file(pointer: impl Fn() -> Expr) -> File {
    let local = Stmt::Decl(DeclStmt {
        decl: Box::new(Decl::Gen(GenDecl::new(
            Token::Var,
            [Spec::Value(ValueSpec {
                names: smallvec![Ident::new("w")],
                ty: Some(pointer()),
                ..Default::default()
            })],
        ))),
    });

    File::new(
        "widgets",
        [Decl::Func(FuncDecl::new(
            "NewWidget",
            FuncType::new(
                FieldList::new([Field::new([Ident::new("parent")], pointer())]),
                Some(FieldList::new([Field::new([], pointer())])),
            ),
            Some(BlockStmt::new([local, Stmt::ret([Expr::ident("w")])])),
        ))],
    )
}

///Package that contains every node shape at least once. It does not type check.
pub fn kitchen_sink() -> Package {
    let block = |list: Vec<Stmt>| BlockStmt::new(list);

    let import = Decl::Gen(GenDecl::new(
        Token::Import,
        [Spec::Import(ImportSpec {
            doc: Some(CommentGroup::new([Comment::new("// printing")])),
            name: Some(Ident::new("f")),
            path: BasicLit::string("fmt"),
            comment: Some(CommentGroup::new([Comment::new("// aliased")])),
            end_pos: Pos::NONE,
        })],
    ));

    let consts = Decl::Gen(GenDecl::new(
        Token::Const,
        [Spec::Value(ValueSpec {
            names: smallvec![Ident::new("Pi")],
            values: vec![Expr::lit(BasicLit::new(LitKind::Float, "3.14"))],
            ..Default::default()
        })],
    ));

    let mut coord = Field::new([Ident::new("X"), Ident::new("Y")], Expr::ident("int"));
    coord.tag = Some(BasicLit::new(LitKind::String, "`json:\"xy\"`"));
    coord.comment = Some(CommentGroup::new([Comment::new("// position")]));

    let area = Field::new(
        [Ident::new("Area")],
        Expr::FuncType(FuncType::new(
            FieldList::default(),
            Some(FieldList::new([Field::new([], Expr::ident("float64"))])),
        )),
    );

    let types = Decl::Gen(GenDecl::new(
        Token::Type,
        [
            Spec::Type(TypeSpec {
                doc: None,
                name: Ident::new("Point"),
                assign: Pos::NONE,
                ty: Expr::StructType(StructType {
                    struct_pos: Pos::NONE,
                    fields: FieldList::new([coord]),
                    incomplete: false,
                }),
                comment: None,
            }),
            Spec::Type(TypeSpec {
                doc: None,
                name: Ident::new("Shape"),
                assign: Pos::NONE,
                ty: Expr::InterfaceType(InterfaceType {
                    interface: Pos::NONE,
                    methods: FieldList::new([area]),
                    incomplete: false,
                }),
                comment: None,
            }),
            Spec::Type(TypeSpec {
                doc: None,
                name: Ident::new("Table"),
                assign: Pos::NONE,
                ty: Expr::map_of(
                    Expr::ident("string"),
                    Expr::ArrayType(ArrayType {
                        lbrack: Pos::NONE,
                        len: Some(Box::new(Expr::lit(BasicLit::int(3)))),
                        elt: Box::new(Expr::ChanType(ChanType {
                            begin: Pos::NONE,
                            arrow: Pos::NONE,
                            dir: ChanDir::Recv,
                            value: Box::new(Expr::ident("int")),
                        })),
                    }),
                ),
                comment: None,
            }),
        ],
    ));

    //var x int
    let local_var = Stmt::Decl(DeclStmt {
        decl: Box::new(Decl::Gen(GenDecl::new(
            Token::Var,
            [Spec::Value(ValueSpec {
                names: smallvec![Ident::new("x")],
                ty: Some(Expr::ident("int")),
                ..Default::default()
            })],
        ))),
    });

    //outer: for k, v := range args[1:] { continue outer }
    let labeled_range = Stmt::Labeled(LabeledStmt {
        label: Ident::new("outer"),
        colon: Pos::NONE,
        stmt: Box::new(Stmt::Range(RangeStmt {
            for_pos: Pos::NONE,
            key: Some(Expr::ident("k")),
            value: Some(Expr::ident("v")),
            tok_pos: Pos::NONE,
            tok: Token::Define,
            x: Expr::Slice(SliceExpr {
                x: Box::new(Expr::ident("args")),
                lbrack: Pos::NONE,
                low: Some(Box::new(Expr::lit(BasicLit::int(1)))),
                high: None,
                max: None,
                slice3: false,
                rbrack: Pos::NONE,
            }),
            body: block(vec![Stmt::Branch(BranchStmt {
                tok_pos: Pos::NONE,
                tok: Token::Continue,
                label: Some(Ident::new("outer")),
            })]),
        })),
    });

    //switch y := args[0]; y { case "a": (f.Println)(y); default: fallthrough }
    let switch = Stmt::Switch(SwitchStmt {
        switch: Pos::NONE,
        init: Some(Box::new(Stmt::assign(
            [Expr::ident("y")],
            Token::Define,
            [Expr::Index(IndexExpr {
                x: Box::new(Expr::ident("args")),
                lbrack: Pos::NONE,
                index: Box::new(Expr::lit(BasicLit::int(0))),
                rbrack: Pos::NONE,
            })],
        ))),
        tag: Some(Expr::ident("y")),
        body: block(vec![
            Stmt::CaseClause(CaseClause {
                case: Pos::NONE,
                list: vec![Expr::lit(BasicLit::string("a"))],
                colon: Pos::NONE,
                body: vec![Stmt::expr(Expr::call(
                    Expr::paren(Expr::qualified("f", "Println")),
                    [Expr::ident("y")],
                ))],
            }),
            Stmt::CaseClause(CaseClause {
                case: Pos::NONE,
                list: vec![],
                colon: Pos::NONE,
                body: vec![Stmt::Branch(BranchStmt {
                    tok_pos: Pos::NONE,
                    tok: Token::Fallthrough,
                    label: None,
                })],
            }),
        ]),
    });

    //switch any.(type) { case int: }
    let type_switch = Stmt::TypeSwitch(TypeSwitchStmt {
        switch: Pos::NONE,
        init: None,
        assign: Box::new(Stmt::expr(Expr::TypeAssert(TypeAssertExpr {
            x: Box::new(Expr::ident("any")),
            lparen: Pos::NONE,
            ty: None,
            rparen: Pos::NONE,
        }))),
        body: block(vec![Stmt::CaseClause(CaseClause {
            case: Pos::NONE,
            list: vec![Expr::ident("int")],
            colon: Pos::NONE,
            body: vec![],
        })]),
    });

    //select { case ch <- 1: ; default: <bad> }
    let select = Stmt::Select(SelectStmt {
        select: Pos::NONE,
        body: block(vec![
            Stmt::CommClause(CommClause {
                case: Pos::NONE,
                comm: Some(Box::new(Stmt::Send(SendStmt {
                    chan: Expr::ident("ch"),
                    arrow: Pos::NONE,
                    value: Expr::lit(BasicLit::int(1)),
                }))),
                colon: Pos::NONE,
                body: vec![Stmt::Empty(EmptyStmt::default())],
            }),
            Stmt::CommClause(CommClause {
                case: Pos::NONE,
                comm: None,
                colon: Pos::NONE,
                body: vec![Stmt::Bad(BadStmt::default())],
            }),
        ]),
    });

    //go func() {}()
    let go = Stmt::Go(GoStmt {
        go: Pos::NONE,
        call: CallExpr {
            fun: Box::new(Expr::FuncLit(FuncLit {
                ty: FuncType::new(FieldList::default(), None),
                body: BlockStmt::default(),
            })),
            ..Default::default()
        },
    });

    //defer close(ch)
    let defer = Stmt::Defer(DeferStmt {
        defer: Pos::NONE,
        call: CallExpr {
            fun: Box::new(Expr::ident("close")),
            args: vec![Expr::ident("ch")],
            ..Default::default()
        },
    });

    //if !ok && done {} else {}
    let branch = Stmt::If(IfStmt {
        if_pos: Pos::NONE,
        init: None,
        cond: Expr::binary(
            Expr::unary(Token::Not, Expr::ident("ok")),
            Token::LAnd,
            Expr::ident("done"),
        ),
        body: BlockStmt::default(),
        else_branch: Some(Box::new(Stmt::block([]))),
    });

    //Point{X: 1}
    let composite = Stmt::expr(Expr::CompositeLit(CompositeLit {
        ty: Some(Box::new(Expr::ident("Point"))),
        lbrace: Pos::NONE,
        elts: vec![Expr::KeyValue(KeyValueExpr {
            key: Box::new(Expr::ident("X")),
            colon: Pos::NONE,
            value: Box::new(Expr::lit(BasicLit::int(1))),
        })],
        rbrace: Pos::NONE,
        incomplete: false,
    }));

    //for ; ; x++ {}
    let endless = Stmt::For(ForStmt {
        for_pos: Pos::NONE,
        init: None,
        cond: None,
        post: Some(Box::new(Stmt::IncDec(IncDecStmt {
            x: Expr::ident("x"),
            tok_pos: Pos::NONE,
            tok: Token::Inc,
        }))),
        body: BlockStmt::default(),
    });

    let run = Decl::Func(FuncDecl::new(
        "Run",
        FuncType::new(
            FieldList::new([Field::new(
                [Ident::new("args")],
                Expr::Ellipsis(Ellipsis {
                    ellipsis: Pos::NONE,
                    elt: Some(Box::new(Expr::ident("string"))),
                }),
            )]),
            None,
        ),
        Some(block(vec![
            local_var,
            labeled_range,
            switch,
            type_switch,
            select,
            go,
            defer,
            branch,
            composite,
            Stmt::expr(Expr::star(Expr::ident("p"))),
            Stmt::expr(Expr::Bad(BadExpr::default())),
            endless,
            Stmt::assign([Expr::ident("_")], Token::Assign, [Expr::ident("x")]),
            Stmt::ret([]),
        ])),
    ));

    let file = File {
        doc: Some(CommentGroup::new([Comment::new("// Package sink.")])),
        ..File::new(
            "sink",
            [import, consts, types, Decl::Bad(BadDecl::default()), run],
        )
    };

    Package::new("sink").with_file("sink.go", file)
}

///Every node shape of the grammar.
pub const ALL_KINDS: [NodeKind; 55] = [
    NodeKind::Comment,
    NodeKind::CommentGroup,
    NodeKind::Field,
    NodeKind::FieldList,
    NodeKind::BadExpr,
    NodeKind::Ident,
    NodeKind::BasicLit,
    NodeKind::Ellipsis,
    NodeKind::FuncLit,
    NodeKind::CompositeLit,
    NodeKind::ParenExpr,
    NodeKind::SelectorExpr,
    NodeKind::IndexExpr,
    NodeKind::SliceExpr,
    NodeKind::TypeAssertExpr,
    NodeKind::CallExpr,
    NodeKind::StarExpr,
    NodeKind::UnaryExpr,
    NodeKind::BinaryExpr,
    NodeKind::KeyValueExpr,
    NodeKind::ArrayType,
    NodeKind::StructType,
    NodeKind::FuncType,
    NodeKind::InterfaceType,
    NodeKind::MapType,
    NodeKind::ChanType,
    NodeKind::BadStmt,
    NodeKind::DeclStmt,
    NodeKind::EmptyStmt,
    NodeKind::LabeledStmt,
    NodeKind::ExprStmt,
    NodeKind::SendStmt,
    NodeKind::IncDecStmt,
    NodeKind::AssignStmt,
    NodeKind::GoStmt,
    NodeKind::DeferStmt,
    NodeKind::ReturnStmt,
    NodeKind::BranchStmt,
    NodeKind::BlockStmt,
    NodeKind::IfStmt,
    NodeKind::CaseClause,
    NodeKind::SwitchStmt,
    NodeKind::TypeSwitchStmt,
    NodeKind::CommClause,
    NodeKind::SelectStmt,
    NodeKind::ForStmt,
    NodeKind::RangeStmt,
    NodeKind::ImportSpec,
    NodeKind::ValueSpec,
    NodeKind::TypeSpec,
    NodeKind::BadDecl,
    NodeKind::GenDecl,
    NodeKind::FuncDecl,
    NodeKind::File,
    NodeKind::Package,
];

///One visitor call, as seen by [Recorder].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Enter(NodeKind, usize),
    Close(usize),
}

///Visitor that records every call and recurses everywhere.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl astor::Visitor for Recorder {
    fn visit(&mut self, cursor: &mut Cursor<'_>) -> bool {
        match cursor.kind() {
            Some(kind) => self.events.push(Event::Enter(kind, cursor.depth())),
            None => self.events.push(Event::Close(cursor.depth())),
        }
        true
    }
}

impl Recorder {
    pub fn entered(&self) -> Vec<NodeKind> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Enter(kind, _) => Some(*kind),
                Event::Close(_) => None,
            })
            .collect()
    }
}
