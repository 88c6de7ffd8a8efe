pub mod config_helper;
pub mod html_entities;
pub mod inline_markup;
pub mod text_metrics;
pub mod win_ansi;
