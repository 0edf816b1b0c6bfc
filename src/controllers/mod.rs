pub mod decor;
