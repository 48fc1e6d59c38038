//! Pure decision logic, one module per puzzle kind. Every validator reduces
//! to `validate(input, state) -> Incomplete | Success | Failure`; the views
//! wire the outcomes to timelines and transitions.

pub mod binary;
pub mod cipher;
pub mod drake;
pub mod frequency;
pub mod maze;
pub mod memory;
pub mod pager;
pub mod passkey;
pub mod phrase;
