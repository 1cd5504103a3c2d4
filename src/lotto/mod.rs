pub mod ball;
pub mod draw;
pub mod output;

pub use ball::{Ball, hue_for};
pub use draw::{Draw, HIGHEST_NUMBER, LOWEST_NUMBER, NUMBERS_PER_DRAW, draw, draw_many};
pub use output::{write_csv, write_json};
