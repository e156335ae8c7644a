mod config;
mod points;
