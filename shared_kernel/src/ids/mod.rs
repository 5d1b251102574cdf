pub mod integer_ids;
