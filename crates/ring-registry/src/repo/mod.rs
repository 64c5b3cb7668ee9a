//! Repository modules for database operations.

pub mod boxers;

pub use boxers::BoxerRepo;
