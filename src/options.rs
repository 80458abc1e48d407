// src/options.rs
//! Options: [`Configuration`], the [`Document`] lookup and the [`OptionsResolver`].

mod config;
mod document;
mod resolver;

pub use config::Configuration;
pub use config::DEFAULT_LOG_LEVEL;

pub use document::Document;
pub use document::StaticDocument;

pub use resolver::get_options;
pub use resolver::OptionsResolver;
pub use resolver::OptionsResolverBuilder;
pub use resolver::OptionsResolverError;
pub use resolver::DEFAULT_SETTINGS_ATTRIBUTE;
pub use resolver::DEFAULT_SETTINGS_ELEMENT_ID;
pub use resolver::OPTIONS_QUERY_PARAM;
