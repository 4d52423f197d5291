#[path = "helpers/mod.rs"]
mod helpers;

#[path = "resolution/mod.rs"]
mod resolution;

#[path = "emission/mod.rs"]
mod emission;
