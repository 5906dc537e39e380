// SPDX-License-Identifier: MPL-2.0
//! `local_photos` discovers the photos bundled with an application, reads
//! their pixel dimensions, and hands a UI the resulting list of media items.
//!
//! The entry point for a UI is [`app::LocalImages`]: mount it once, observe its
//! [`LoadState`](domain::media::LoadState), drop it on teardown. The load cycle
//! itself lives in [`application::ImageLoader`], wired to a discovery adapter
//! ([`directory_scanner::FsDiscovery`] or
//! [`infrastructure::EmbeddedDiscovery`]) and a probe
//! ([`infrastructure::DecoderProbe`]).

#![doc(html_root_url = "https://docs.rs/local_photos/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
