pub mod match_builder;
