// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with no infrastructure dependencies.
//!
//! This module contains pure domain types and the rules attached to them.
//! Apart from `serde` derives (the load state is printed by the CLI) it only
//! depends on `std`, which keeps it trivially testable.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`Dimensions`](media::Dimensions), [`LoadState`](media::LoadState))

pub mod media;
