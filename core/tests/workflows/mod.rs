// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the launchdesk-core crate.
//!
//! These tests drive the components against an in-memory backend, and once
//! against a mock HTTP server through the real client.

mod api_backend;
mod gallery_delete;
mod launch_guard;
mod launch_search;
mod media_picker;
