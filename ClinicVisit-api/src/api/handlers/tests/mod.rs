mod health_test;
mod vitals_test;
