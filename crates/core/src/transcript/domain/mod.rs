pub mod normalize;
pub mod resolved_transcript;
pub mod selection;
pub mod timed_entry;
pub mod transcript_source;
pub mod variant;
pub mod variant_list;
