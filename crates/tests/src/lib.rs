//! HTTP integration tests live under `tests/`.
