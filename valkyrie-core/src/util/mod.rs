pub mod date_deserialization_ops;
