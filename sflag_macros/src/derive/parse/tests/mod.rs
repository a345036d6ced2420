//! Tests for derive input parsing.

mod input;
