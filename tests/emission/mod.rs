//! Import block emission tests

pub mod tests_import_block;
