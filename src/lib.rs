//! A library for rewriting autoheader-style C/C++ header templates into
//! cmake configuration files.
//!
//! Header templates mark configuration symbols with `#undef SYMBOL` lines,
//! leaving the defined/undefined state to be substituted by the build
//! system. This crate rewrites each such line into the cmake directive
//! `#cmakedefine SYMBOL @SYMBOL@` and passes every other line through
//! unchanged.
//!
//! ```
//! use prepare_cmake_config::rewrite_template;
//!
//! let template = "/* ssl */\n#undef ENABLE_SSL\n";
//! assert_eq!(
//!     rewrite_template(template),
//!     "/* ssl */\n#cmakedefine ENABLE_SSL @ENABLE_SSL@\n"
//! );
//! ```

pub mod rewrite;

pub use rewrite::{config_symbols, rewrite_template, rewrite_template_file};
