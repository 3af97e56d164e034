/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use std::{error::Error, fmt::Display};

use astor_ast::AstError;
use backtrace::Backtrace;

///Environment variable that enables backtrace capturing for [InspectError]s.
pub const BACKTRACE_ENV: &str = "ASTOR_BACKTRACE";

///Failure of a single inspection.
///
/// This only happens if a visitor installed a replacement that does not fit the slot it was
/// installed in. The tree that was being inspected is lost at that point.
#[derive(Debug)]
pub struct InspectError {
    pub error: AstError,
    ///Depth of the slot that rejected the node. The root slot has depth 0.
    pub depth: usize,
    pub backtrace: Option<Backtrace>,
}

impl InspectError {
    pub(crate) fn new(error: AstError, depth: usize) -> Self {
        InspectError {
            error,
            depth,
            backtrace: if std::env::var(BACKTRACE_ENV).is_ok() {
                Some(Backtrace::new())
            } else {
                None
            },
        }
    }
}

impl Display for InspectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at depth {})", self.error, self.depth)?;
        if let Some(bt) = &self.backtrace {
            write!(f, "\nBacktrace:\n{:?}", bt)
        } else {
            write!(
                f,
                "\n`{BACKTRACE_ENV}=1` to print the backtrace of the error occurrence"
            )
        }
    }
}

impl Error for InspectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
