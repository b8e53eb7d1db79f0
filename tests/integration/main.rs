//! Integration test modules.

mod day_logging_test;
mod storage_backends_test;
mod team_overview_test;
