//! Client distinguished-name extraction
//!
//! Reverse proxies that terminate mTLS forward the client certificate subject
//! in a request header. This module picks the right header and recovers the
//! CN and OU attributes from it:
//!
//! - `parser`: splits a subject DN string into [`DnAttributes`]
//! - `headers`: selects the header among the configured candidates
//! - `config`: candidate header names and duplicate-attribute policy

pub mod config;
pub mod headers;
pub mod parser;

pub use config::{DuplicateAttributePolicy, ExtractorConfig, DEFAULT_HEADER_NAMES};
pub use headers::{extract_dn, DnExtractor, HeaderMap, HeaderSource};
pub use parser::{parse_dn, parse_dn_with, DnAttributes};
