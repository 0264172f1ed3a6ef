pub mod source_sampling;
