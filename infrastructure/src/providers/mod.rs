//! Provider adapters for the hosted text-generation endpoint

pub mod hugging_face;
