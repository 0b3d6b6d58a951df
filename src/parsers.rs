pub mod fen;
pub mod notation;
