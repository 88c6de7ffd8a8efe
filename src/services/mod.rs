pub mod sonar_client;
pub mod markup_normalizer;
pub mod rule_section_parser;
pub mod code_block_formatter;
pub mod report_generator;
pub mod document_renderer;
pub mod pdf_writer;
