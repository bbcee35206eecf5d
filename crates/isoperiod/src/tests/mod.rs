//! Cross-cutting tests that exercise the parse and build halves
//! together.

mod round_trip;
