//! # boca-maker
//!
//! This is both an application and a library, the library can be used to build the contests
//! inside your application with the same options of the `boca-maker` binary. The actual work is
//! done by `boca_maker_format`.

#[macro_use]
extern crate log;

pub mod contest;
pub mod error;
pub mod opt;

pub use contest::*;
pub use opt::*;
