//! IDE features — High-level APIs for LSP handlers.
//!
//! This module is the boundary the protocol layer consumes. Each function
//! corresponds to an editor request, expressed over this crate's own types;
//! conversion to wire types happens outside.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take index state in, return data out
//! 2. **No wire types**: results use [`Span`](crate::base::Span) and
//!    [`DocumentId`](crate::base::DocumentId), converted at the LSP boundary
//! 3. **Recover, never crash**: unknown documents and positions that cover
//!    nothing come back as empty results
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use lunora::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new(my_parser);
//! host.open_document("file:///proj/init.lua", text);
//!
//! let symbols = host.list_symbols("file:///proj/init.lua");
//! let definition = host.find_definition("file:///proj/init.lua", position);
//! ```

mod analysis;
mod goto;
mod symbols;

pub use analysis::{AnalysisHost, SharedAnalysisHost};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use symbols::{SymbolInfo, document_symbols, workspace_symbols};
