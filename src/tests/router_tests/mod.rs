mod health_tests;
mod report_tests;
