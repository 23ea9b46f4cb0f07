mod models;
mod rules;
