//! Shared helpers for gobot integration tests.

#![allow(dead_code)]

pub mod git_helpers;
