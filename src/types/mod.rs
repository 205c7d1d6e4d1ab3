pub mod channel_document;
