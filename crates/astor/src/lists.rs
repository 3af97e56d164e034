/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Helpers for the common child lists. Each builds a new list of the same length, where slot `k` holds the
//! inspected node of the original slot `k`. Elements are never added, removed or reordered.

use astor_ast::{Decl, Expr, IdentList, Stmt, Syntax};

use crate::{
    dispatch::{Driver, Walker},
    InspectError,
};

impl<D: Driver> Walker<'_, D> {
    pub(crate) fn list<L, T>(&mut self, list: L) -> Result<L, InspectError>
    where
        L: IntoIterator<Item = T> + FromIterator<T>,
        T: Syntax,
    {
        list.into_iter().map(|child| self.slot(child)).collect()
    }

    pub(crate) fn inspect_ident_list(&mut self, list: IdentList) -> Result<IdentList, InspectError> {
        self.list(list)
    }

    pub(crate) fn inspect_expr_list(&mut self, list: Vec<Expr>) -> Result<Vec<Expr>, InspectError> {
        self.list(list)
    }

    pub(crate) fn inspect_stmt_list(&mut self, list: Vec<Stmt>) -> Result<Vec<Stmt>, InspectError> {
        self.list(list)
    }

    pub(crate) fn inspect_decl_list(&mut self, list: Vec<Decl>) -> Result<Vec<Decl>, InspectError> {
        self.list(list)
    }
}
