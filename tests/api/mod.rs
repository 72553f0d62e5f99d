//! REST API endpoint tests

mod cities_tests;
mod health_tests;
mod points_of_interest_tests;
