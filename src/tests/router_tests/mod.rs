mod api_tests;
mod home_tests;
mod results_tests;
mod static_tests;
