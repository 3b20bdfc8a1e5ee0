//! Server-rendered site-counts content block
//!
//! A dynamic block for a CMS-like content host: per placement it lists the
//! public content-type counts, echoes the current item id, and prints the
//! titles matched by one fixed filtered query (tag, category, custom-field
//! value, publish-hour window, current-item exclusion). The host is
//! abstracted behind [`host::ContentHost`]; `host::MemoryHost` implements it
//! over a JSON-loadable in-memory site for previewing and tests.

pub mod block;
pub mod cli;
pub mod host;
pub mod markup;
pub mod query;

pub use block::{BLOCK_NAME, BlockAttributes, BlockContext, BlockRegistry, init, render_counts};
pub use host::{ContentHost, ContentType, MemoryHost, PostId, PostStatus};
pub use query::{QueryFilter, QueryHandle, QueryMatch, QueryResponse, StatusFilter};
