mod fixture_tests;
mod helpers;
