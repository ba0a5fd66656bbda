pub mod mask_splits;
pub mod mutation_ratio;
pub mod print_config;
