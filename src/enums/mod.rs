pub mod severity;
pub mod diff_type;
pub mod normalized_block;
pub mod paragraph_style;
pub mod document_element;
pub mod pdf_font;
pub mod client_error;
