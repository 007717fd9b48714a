// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - An in-memory media and launch backend

mod fake_source;
mod fixtures;

#[allow(unused_imports)]
pub use fake_source::FakeSource;
#[allow(unused_imports)]
pub use fixtures::{launch_record, media_object, seo_record, test_config};
