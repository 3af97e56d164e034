/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use thiserror::Error;

use crate::NodeKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AstError {
    ///A node was handed back for a slot that can not hold its kind.
    #[error("{found} can not be placed in a slot of type {expected}")]
    SlotMismatch {
        expected: &'static str,
        found: NodeKind,
    },
}
