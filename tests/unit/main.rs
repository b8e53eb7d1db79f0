//! Unit test modules.

mod coaching_test;
mod meals_test;
mod plan_test;
mod session_test;
