// Copyright 2026 NLRB Memos Contributors
// SPDX-License-Identifier: Apache-2.0

//! Snapshot the NLRB General Counsel memo listing.
//!
//! One run fetches the listing page, keeps the anchors that look like memo
//! links, sorts them by title and writes the result to a JSON file. The file
//! changes only when the listing does (plus its timestamps), so a scheduled
//! job can commit it and let version control do the diffing.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod snapshot;

pub use config::ScrapeConfig;
pub use error::{ScrapeError, ScrapeResult};
pub use report::{MemoRecord, SnapshotReport};
