//! Small line-level building blocks shared by the pages.

pub mod header;
pub mod share_bar;
