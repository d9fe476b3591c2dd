#![warn(rust_2018_idioms)]

use mahjong_notation::app::{Mode, ParserApp};
use mahjong_notation::error;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "H" => {
            // Hand (副露+立牌+和了牌のパース)
            ParserApp::new(Mode::Hand, args2).run();
        }
        "T" => {
            // Tiles (牌の並びのみのパース)
            ParserApp::new(Mode::Tiles, args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
