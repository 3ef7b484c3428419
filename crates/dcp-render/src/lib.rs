//! DCP Render - policy egress
//!
//! Turns a finished [`PolicyDocument`](dcp_model::PolicyDocument) into its
//! two user-facing forms:
//!
//! - **DOCX**: one deterministic word-processing blob, fixed section order
//! - **Preview**: markdown with bracketed placeholders for empty values
//!
//! Both renderers share [`layout`], so headings, column headers and the
//! static tables never drift apart.
//!
//! # Example
//!
//! ```rust,ignore
//! use dcp_render::{render_docx, render_preview};
//!
//! let bytes = render_docx(&document, Some("Acme Corp"))?;
//! std::fs::write("policy.docx", bytes)?;
//! println!("{}", render_preview(&document, Some("Acme Corp"), chrono::Utc::now().date_naive()));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod docx;
pub mod error;
pub mod layout;
pub mod preview;

pub use docx::{build_docx, render_docx, write_docx};
pub use error::RenderError;
pub use preview::{render_preview, ORGANIZATION_PLACEHOLDER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
