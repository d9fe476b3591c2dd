// 手牌文字列のパーサ
//
// "123m 456p [EEEE] 789s11z2z" のように, 空白区切りの副露, '[]'で囲んだ暗槓,
// 末尾の立牌(+和了牌)で手牌を表記する
mod error;
mod hand;
mod lexer;
mod pack;

pub use self::{
    error::*,
    hand::{parse_hand, ParsedHand},
    lexer::{parse_tile_run, parse_tiles, TileRun},
    pack::{make_concealed_kong, make_fixed_pack},
};
