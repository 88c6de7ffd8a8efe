mod support;

mod report_generator_tests;
mod markup_normalizer_tests;
