//! Request and response shapes, their validation rules, and the hand-written
//! conversions to and from the persistence entities.

pub mod cinema;
pub mod endereco;
pub mod filme;
pub mod sessao;

pub use cinema::{CreateCinemaDto, ReadCinemaDto, UpdateCinemaDto};
pub use endereco::{CreateEnderecoDto, ReadEnderecoDto, UpdateEnderecoDto};
pub use filme::{CreateFilmeDto, ReadFilmeDto, UpdateFilmeDto};
pub use sessao::{CreateSessaoDto, ReadSessaoDto, UpdateSessaoDto};
