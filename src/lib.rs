pub mod game;
pub mod mmove;
pub mod parsers;
pub mod piece;
pub mod position;
pub mod search;
