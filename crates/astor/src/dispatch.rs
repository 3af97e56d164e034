/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! The recursion table. For every node shape it lists the child slots in source order, inspects each
//! of them and writes the result back into the slot.

use astor_ast::{CommentGroup, Decl, Expr, Field, FieldList, File, Node, Package, Spec, Stmt, Syntax};

use crate::InspectError;

///Something that can present nodes to a visitor.
pub(crate) trait Driver {
    ///Presents `node` at `depth`. Returns the node that occupies the slot afterwards, and whether the
    /// children of that node should be inspected.
    fn enter(&mut self, node: Node, depth: usize) -> (Node, bool);
    ///Closing call for the node at `depth`.
    fn leave(&mut self, depth: usize);
}

///State of a single walk.
pub(crate) struct Walker<'d, D: Driver> {
    driver: &'d mut D,
    depth: usize,
}

impl<'d, D: Driver> Walker<'d, D> {
    pub(crate) fn new(driver: &'d mut D) -> Self {
        Walker { driver, depth: 0 }
    }

    ///Inspects the node in a child slot and converts the result back into the slot's type.
    pub(crate) fn slot<T: Syntax>(&mut self, child: T) -> Result<T, InspectError> {
        let node = self.inspect(child.into_node())?;
        T::from_node(node).map_err(|e| InspectError::new(e, self.depth))
    }

    ///Boxed slots keep their allocation, only the content is swapped.
    fn boxed<T: Syntax + Default>(&mut self, mut child: Box<T>) -> Result<Box<T>, InspectError> {
        *child = self.slot(std::mem::take(&mut *child))?;
        Ok(child)
    }

    ///Optional slots are skipped when empty.
    fn optional<T: Syntax>(&mut self, child: Option<T>) -> Result<Option<T>, InspectError> {
        child.map(|c| self.slot(c)).transpose()
    }

    fn optional_boxed<T: Syntax + Default>(
        &mut self,
        child: Option<Box<T>>,
    ) -> Result<Option<Box<T>>, InspectError> {
        child.map(|c| self.boxed(c)).transpose()
    }

    fn inspect(&mut self, node: Node) -> Result<Node, InspectError> {
        let (node, recurse) = self.driver.enter(node, self.depth);
        if !recurse {
            return Ok(node);
        }

        self.depth += 1;
        let node = self.children(node)?;
        self.depth -= 1;

        self.driver.leave(self.depth);
        Ok(node)
    }

    fn children(&mut self, node: Node) -> Result<Node, InspectError> {
        let node = match node {
            Node::Comment(c) => Node::Comment(c),
            Node::CommentGroup(g) => Node::CommentGroup(self.comment_group(g)?),
            Node::Field(f) => Node::Field(self.field(f)?),
            Node::FieldList(l) => Node::FieldList(self.field_list(l)?),
            Node::Expr(e) => Node::Expr(self.expr(e)?),
            Node::Stmt(s) => Node::Stmt(self.stmt(s)?),
            Node::Spec(s) => Node::Spec(self.spec(s)?),
            Node::Decl(d) => Node::Decl(self.decl(d)?),
            Node::File(f) => Node::File(self.file(f)?),
            Node::Package(p) => Node::Package(self.package(p)?),
        };
        Ok(node)
    }

    fn comment_group(&mut self, mut group: CommentGroup) -> Result<CommentGroup, InspectError> {
        group.list = self.list(group.list)?;
        Ok(group)
    }

    fn field(&mut self, mut field: Field) -> Result<Field, InspectError> {
        field.doc = self.optional(field.doc)?;
        field.names = self.inspect_ident_list(field.names)?;
        field.ty = self.boxed(field.ty)?;
        field.tag = self.optional(field.tag)?;
        field.comment = self.optional(field.comment)?;
        Ok(field)
    }

    fn field_list(&mut self, mut list: FieldList) -> Result<FieldList, InspectError> {
        list.list = self.list(list.list)?;
        Ok(list)
    }

    fn expr(&mut self, expr: Expr) -> Result<Expr, InspectError> {
        let expr = match expr {
            e @ (Expr::Bad(_) | Expr::Ident(_) | Expr::BasicLit(_)) => e,
            Expr::Ellipsis(mut e) => {
                e.elt = self.optional_boxed(e.elt)?;
                Expr::Ellipsis(e)
            }
            Expr::FuncLit(mut f) => {
                f.ty = self.slot(f.ty)?;
                f.body = self.slot(f.body)?;
                Expr::FuncLit(f)
            }
            Expr::CompositeLit(mut c) => {
                c.ty = self.optional_boxed(c.ty)?;
                c.elts = self.inspect_expr_list(c.elts)?;
                Expr::CompositeLit(c)
            }
            Expr::Paren(mut p) => {
                p.x = self.boxed(p.x)?;
                Expr::Paren(p)
            }
            Expr::Selector(mut s) => {
                s.x = self.boxed(s.x)?;
                s.sel = self.slot(s.sel)?;
                Expr::Selector(s)
            }
            Expr::Index(mut i) => {
                i.x = self.boxed(i.x)?;
                i.index = self.boxed(i.index)?;
                Expr::Index(i)
            }
            Expr::Slice(mut s) => {
                s.x = self.boxed(s.x)?;
                s.low = self.optional_boxed(s.low)?;
                s.high = self.optional_boxed(s.high)?;
                s.max = self.optional_boxed(s.max)?;
                Expr::Slice(s)
            }
            Expr::TypeAssert(mut t) => {
                t.x = self.boxed(t.x)?;
                t.ty = self.optional_boxed(t.ty)?;
                Expr::TypeAssert(t)
            }
            Expr::Call(mut c) => {
                c.fun = self.boxed(c.fun)?;
                c.args = self.inspect_expr_list(c.args)?;
                Expr::Call(c)
            }
            Expr::Star(mut s) => {
                s.x = self.boxed(s.x)?;
                Expr::Star(s)
            }
            Expr::Unary(mut u) => {
                u.x = self.boxed(u.x)?;
                Expr::Unary(u)
            }
            Expr::Binary(mut b) => {
                b.x = self.boxed(b.x)?;
                b.y = self.boxed(b.y)?;
                Expr::Binary(b)
            }
            Expr::KeyValue(mut kv) => {
                kv.key = self.boxed(kv.key)?;
                kv.value = self.boxed(kv.value)?;
                Expr::KeyValue(kv)
            }

            Expr::ArrayType(mut a) => {
                a.len = self.optional_boxed(a.len)?;
                a.elt = self.boxed(a.elt)?;
                Expr::ArrayType(a)
            }
            Expr::StructType(mut s) => {
                s.fields = self.slot(s.fields)?;
                Expr::StructType(s)
            }
            Expr::FuncType(mut f) => {
                f.params = self.optional(f.params)?;
                f.results = self.optional(f.results)?;
                Expr::FuncType(f)
            }
            Expr::InterfaceType(mut i) => {
                i.methods = self.slot(i.methods)?;
                Expr::InterfaceType(i)
            }
            Expr::MapType(mut m) => {
                m.key = self.boxed(m.key)?;
                m.value = self.boxed(m.value)?;
                Expr::MapType(m)
            }
            Expr::ChanType(mut c) => {
                c.value = self.boxed(c.value)?;
                Expr::ChanType(c)
            }
        };
        Ok(expr)
    }

    fn stmt(&mut self, stmt: Stmt) -> Result<Stmt, InspectError> {
        let stmt = match stmt {
            s @ (Stmt::Bad(_) | Stmt::Empty(_)) => s,
            Stmt::Decl(mut d) => {
                d.decl = self.boxed(d.decl)?;
                Stmt::Decl(d)
            }
            Stmt::Labeled(mut l) => {
                l.label = self.slot(l.label)?;
                l.stmt = self.boxed(l.stmt)?;
                Stmt::Labeled(l)
            }
            Stmt::Expr(mut e) => {
                e.x = self.slot(e.x)?;
                Stmt::Expr(e)
            }
            Stmt::Send(mut s) => {
                s.chan = self.slot(s.chan)?;
                s.value = self.slot(s.value)?;
                Stmt::Send(s)
            }
            Stmt::IncDec(mut i) => {
                i.x = self.slot(i.x)?;
                Stmt::IncDec(i)
            }
            Stmt::Assign(mut a) => {
                a.lhs = self.inspect_expr_list(a.lhs)?;
                a.rhs = self.inspect_expr_list(a.rhs)?;
                Stmt::Assign(a)
            }
            Stmt::Go(mut g) => {
                g.call = self.slot(g.call)?;
                Stmt::Go(g)
            }
            Stmt::Defer(mut d) => {
                d.call = self.slot(d.call)?;
                Stmt::Defer(d)
            }
            Stmt::Return(mut r) => {
                r.results = self.inspect_expr_list(r.results)?;
                Stmt::Return(r)
            }
            Stmt::Branch(mut b) => {
                b.label = self.optional(b.label)?;
                Stmt::Branch(b)
            }
            Stmt::Block(mut b) => {
                b.list = self.inspect_stmt_list(b.list)?;
                Stmt::Block(b)
            }
            Stmt::If(mut i) => {
                i.init = self.optional_boxed(i.init)?;
                i.cond = self.slot(i.cond)?;
                i.body = self.slot(i.body)?;
                i.else_branch = self.optional_boxed(i.else_branch)?;
                Stmt::If(i)
            }
            Stmt::CaseClause(mut c) => {
                c.list = self.inspect_expr_list(c.list)?;
                c.body = self.inspect_stmt_list(c.body)?;
                Stmt::CaseClause(c)
            }
            Stmt::Switch(mut s) => {
                s.init = self.optional_boxed(s.init)?;
                s.tag = self.optional(s.tag)?;
                s.body = self.slot(s.body)?;
                Stmt::Switch(s)
            }
            Stmt::TypeSwitch(mut t) => {
                t.init = self.optional_boxed(t.init)?;
                t.assign = self.boxed(t.assign)?;
                t.body = self.slot(t.body)?;
                Stmt::TypeSwitch(t)
            }
            Stmt::CommClause(mut c) => {
                c.comm = self.optional_boxed(c.comm)?;
                c.body = self.inspect_stmt_list(c.body)?;
                Stmt::CommClause(c)
            }
            Stmt::Select(mut s) => {
                s.body = self.slot(s.body)?;
                Stmt::Select(s)
            }
            Stmt::For(mut f) => {
                f.init = self.optional_boxed(f.init)?;
                f.cond = self.optional(f.cond)?;
                f.post = self.optional_boxed(f.post)?;
                f.body = self.slot(f.body)?;
                Stmt::For(f)
            }
            Stmt::Range(mut r) => {
                r.key = self.optional(r.key)?;
                r.value = self.optional(r.value)?;
                r.x = self.slot(r.x)?;
                r.body = self.slot(r.body)?;
                Stmt::Range(r)
            }
        };
        Ok(stmt)
    }

    fn spec(&mut self, spec: Spec) -> Result<Spec, InspectError> {
        let spec = match spec {
            Spec::Import(mut i) => {
                i.doc = self.optional(i.doc)?;
                i.name = self.optional(i.name)?;
                i.path = self.slot(i.path)?;
                i.comment = self.optional(i.comment)?;
                Spec::Import(i)
            }
            Spec::Value(mut v) => {
                v.doc = self.optional(v.doc)?;
                v.names = self.inspect_ident_list(v.names)?;
                v.ty = self.optional(v.ty)?;
                v.values = self.inspect_expr_list(v.values)?;
                v.comment = self.optional(v.comment)?;
                Spec::Value(v)
            }
            Spec::Type(mut t) => {
                t.doc = self.optional(t.doc)?;
                t.name = self.slot(t.name)?;
                t.ty = self.slot(t.ty)?;
                t.comment = self.optional(t.comment)?;
                Spec::Type(t)
            }
        };
        Ok(spec)
    }

    fn decl(&mut self, decl: Decl) -> Result<Decl, InspectError> {
        let decl = match decl {
            d @ Decl::Bad(_) => d,
            Decl::Gen(mut g) => {
                g.doc = self.optional(g.doc)?;
                g.specs = self.list(g.specs)?;
                Decl::Gen(g)
            }
            Decl::Func(mut f) => {
                f.doc = self.optional(f.doc)?;
                f.recv = self.optional(f.recv)?;
                f.name = self.slot(f.name)?;
                f.ty = self.slot(f.ty)?;
                f.body = self.optional(f.body)?;
                Decl::Func(f)
            }
        };
        Ok(decl)
    }

    fn file(&mut self, mut file: File) -> Result<File, InspectError> {
        file.doc = self.optional(file.doc)?;
        file.name = self.slot(file.name)?;
        file.decls = self.inspect_decl_list(file.decls)?;
        //`file.comments` holds the same groups that are attached to the declarations and fields,
        // which have been inspected through their owners already.
        Ok(file)
    }

    fn package(&mut self, mut package: Package) -> Result<Package, InspectError> {
        package.files = package
            .files
            .into_iter()
            .map(|(name, file)| self.slot(file).map(|file| (name, file)))
            .collect::<Result<_, _>>()?;
        Ok(package)
    }
}
