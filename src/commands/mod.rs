//! # Command Implementations
//!
//! The `svn-ignore` tool has a single action, applying ignore files to a
//! working copy. It lives in its own module following the usual layout:
//!
//! - An `Args` struct that defines the arguments and options, derived using
//!   `clap` and flattened into the top-level parser.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `svn_ignore` library to perform the work.

pub mod apply;
