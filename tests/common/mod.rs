//! Common test utilities for HTTP contract and scenario tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod github_mock;

pub use github_mock::{BRANCH_PATH, GithubMock, branch_body};
