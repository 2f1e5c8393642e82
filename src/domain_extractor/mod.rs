pub mod extractor;
pub mod suffix_list;
pub mod url_normalizer;


pub use extractor::DomainExtractor;
pub use suffix_list::load_suffix_list;
pub use url_normalizer::parse_with_fallback;
