//! Schedule-field interpretation: expanding cron-style hour/minute text into
//! daily occurrences, classifying jobs by firing frequency, converting UTC
//! occurrences to Mountain-time wall clock, and describing recurring
//! patterns in plain language.
//!
//! Everything here is a pure function over the job snapshot; nothing holds
//! state between calls.

pub mod classify;
pub mod describe;
pub mod expand;
pub mod field;
pub mod timezone;
