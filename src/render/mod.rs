mod deck;

pub use deck::{write_deck, ViewState};
