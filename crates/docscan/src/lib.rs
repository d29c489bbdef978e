//! docscan: documentation bundle analysis.
//!
//! docscan reads a documentation root, a directory with a `pages` subdirectory of markdown
//! and text files, and reports what the pages are about: TF-IDF ranked keywords, the
//! heading hierarchy of every page, categorized code examples, and the API names those
//! examples use.

#![warn(missing_docs)]

pub mod cli;
