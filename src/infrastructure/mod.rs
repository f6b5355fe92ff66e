// Infrastructure layer module
// Store adapters implementing the domain repository contracts

pub mod repositories;
