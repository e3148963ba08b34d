//! Game system rules.
//!
//! Only Call of Cthulhu 7e (`coc7e`) is implemented.

pub mod coc7e;
