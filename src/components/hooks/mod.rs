pub mod use_level_var;
