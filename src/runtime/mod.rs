// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings.
//!
//! The controllers are plain Rust; this is the layer that lets a page drive
//! them. JS owns the DOM and hands over a host object of callbacks, Rust owns
//! every decision about what those callbacks should do.

#[cfg(feature = "wasm")]
pub mod wasm;
