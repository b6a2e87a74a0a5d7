mod derivations;
mod models;
