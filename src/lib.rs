//! Potx - gettext message extraction for JS/TS/JSX sources
//!
//! Potx is a CLI tool and library that extracts translatable strings from
//! JavaScript/TypeScript source (including JSX/TSX) and produces a
//! deduplicated gettext message catalog, ready to be written out as a POT
//! template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Mapping configuration and per-pass option resolution
//! - `extraction`: Core extraction engine (classify, build, traverse, merge)
//! - `output`: Catalog rendering (POT and JSON)
//! - `parsers`: SWC-based JS/TS(X) parsing front end
//! - `scanner`: Source file discovery

pub mod cli;
pub mod config;
pub mod extraction;
pub mod output;
pub mod parsers;
pub mod scanner;
