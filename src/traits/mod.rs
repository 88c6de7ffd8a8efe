pub mod sonar_api;
