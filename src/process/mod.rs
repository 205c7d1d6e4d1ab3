pub mod combine_documents;
pub mod write_combined_document;
