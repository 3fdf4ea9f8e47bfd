//! Unit tests for Inkboard.

mod viewport_tests;
