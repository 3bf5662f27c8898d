// Parser module: typed CSV decoding for the source tables.

pub mod csv_tables;

pub use csv_tables::parse_table;
