//! Queries per resource. Every function takes any `ConnectionTrait`, so the
//! same code runs on the pool for reads and on a request's transaction for
//! writes.

pub mod cinema;
pub mod endereco;
pub mod filme;
pub mod sessao;
