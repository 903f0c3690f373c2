//! Browser and server harness for end-to-end tests of the web package.

pub mod browser;
