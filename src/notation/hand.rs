use serde::Serialize;

use super::error::ParseError;
use super::lexer::parse_tile_run;
use super::pack::{make_concealed_kong, make_fixed_pack};
use crate::debug;
use crate::model::*;

// 手牌文字列に使用可能な文字
const ALLOWED_CHARS: &str = "0123456789mpszESWNCFP []";

// [ParsedHand]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHand {
    pub hand: HandTiles,
    pub win_tile: Option<Tile>, // 13枚(副露含む)を1枚超えた牌
}

impl ParsedHand {
    // 和了牌(ツモ牌)があるか
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.win_tile.is_some()
    }
}

/// 副露と立牌を含む手牌文字列をパースする.
///
/// 例: `"[EEEE] 123m 456p 789s 1m 1m"` は暗槓1つ, 明順3つ, 立牌1m, 和了牌1m
pub fn parse_hand(s: &str) -> Result<ParsedHand, ParseError> {
    if let Some(pos) = s.find(|c: char| !ALLOWED_CHARS.contains(c)) {
        return Err(ParseError::IllegalCharacter { pos });
    }
    HandParser::default().run(s)
}

#[derive(Debug, Default)]
struct HandParser {
    packs: Vec<Pack>,
    tiles: Vec<Tile>,             // 区切り文字ごとにクリアする作業用バッファ
    concealed_kong: Option<usize>, // 開いている '[' の位置
}

impl HandParser {
    fn run(mut self, s: &str) -> Result<ParsedHand, ParseError> {
        let bytes = s.as_bytes();
        let mut p = 0;
        while p < bytes.len() {
            match bytes[p] {
                b' ' => {
                    // 暗槓の括弧内に区切りは入れられない
                    if self.concealed_kong.is_some() {
                        return Err(ParseError::IllegalCharacter { pos: p });
                    }
                    self.close_group(p)?;
                }
                b'[' => {
                    if self.concealed_kong.is_some() {
                        return Err(ParseError::IllegalCharacter { pos: p });
                    }
                    self.close_group(p)?;
                    self.concealed_kong = Some(p);
                }
                b']' => {
                    if self.concealed_kong.is_none() {
                        return Err(ParseError::IllegalCharacter { pos: p });
                    }
                    let pack = make_concealed_kong(&self.tiles, p)?;
                    self.push_pack(pack, p)?;
                    self.concealed_kong = None;
                    self.tiles.clear();
                }
                _ => {
                    let run = parse_tile_run(s, p, &mut self.tiles, MAX_BUFFER)?;
                    if run.len == 0 {
                        return Err(ParseError::IllegalCharacter { pos: p });
                    }
                    p += run.len;
                    continue;
                }
            }
            p += 1;
        }

        if let Some(pos) = self.concealed_kong {
            return Err(ParseError::IllegalCharacter { pos });
        }
        self.finish(s.len())
    }

    // 区切り文字までの牌を副露として確定
    fn close_group(&mut self, pos: usize) -> Result<(), ParseError> {
        if let Some(pack) = make_fixed_pack(&self.tiles, pos)? {
            self.push_pack(pack, pos)?;
        }
        self.tiles.clear();
        Ok(())
    }

    fn push_pack(&mut self, pack: Pack, pos: usize) -> Result<(), ParseError> {
        if self.packs.len() >= MAX_PACK {
            return Err(ParseError::TooManyFixedPacks { pos });
        }
        debug!("pack {}: {:?}", self.packs.len(), pack);
        self.packs.push(pack);
        Ok(())
    }

    // 残りの牌を立牌とし, 上限を1枚超えた場合はその牌を和了牌とする
    fn finish(mut self, end: usize) -> Result<ParsedHand, ParseError> {
        let max_cnt = MAX_STANDING - PACK_TILES * self.packs.len();
        let win_tile = if self.tiles.len() == max_cnt + 1 {
            self.tiles.pop()
        } else if self.tiles.len() > max_cnt + 1 {
            return Err(ParseError::TooManyTilesForFixedPack { pos: end });
        } else {
            None
        };
        debug!(
            "packs: {}, standing: {}, win: {:?}",
            self.packs.len(),
            self.tiles.len(),
            win_tile
        );

        Ok(ParsedHand {
            hand: HandTiles {
                fixed_packs: self.packs,
                standing_tiles: self.tiles,
            },
            win_tile,
        })
    }
}

#[cfg(test)]
fn m(r: Rank) -> Tile {
    Tile::new(SUIT_CHARACTERS, r)
}

#[test]
fn test_standing_only() {
    let ph = parse_hand("123456789m1122z").unwrap();
    assert_eq!(ph.hand.pack_count(), 0);
    assert_eq!(ph.hand.tile_count(), 13);
    assert_eq!(ph.win_tile, None);
    assert!(!ph.is_complete());

    let ph = parse_hand("123456789m11222z").unwrap();
    assert_eq!(ph.hand.tile_count(), 13);
    assert_eq!(ph.hand.standing_tiles[12], TILE_S);
    assert_eq!(ph.win_tile, Some(TILE_S));
    assert!(ph.is_complete());
}

#[test]
fn test_fixed_packs() {
    let ph = parse_hand("111m 234m 678m 999s 55p").unwrap();
    assert_eq!(
        ph.hand.fixed_packs,
        vec![
            Pack::new(true, PackKind::Pung, m(1)),
            Pack::new(true, PackKind::Chow, m(3)),
            Pack::new(true, PackKind::Chow, m(7)),
            Pack::new(true, PackKind::Pung, Tile(0x29)),
        ]
    );
    // 副露4つ: 立牌は1枚まで, 2枚目は和了牌
    assert_eq!(ph.hand.standing_tiles, vec![Tile(0x35)]);
    assert_eq!(ph.win_tile, Some(Tile(0x35)));
}

#[test]
fn test_win_tile_after_packs() {
    // 副露2つ: 立牌は7枚まで
    let ph = parse_hand("EEE 567s 1234567p8p").unwrap();
    assert_eq!(ph.hand.pack_count(), 2);
    assert_eq!(ph.hand.tile_count(), 7);
    assert_eq!(ph.win_tile, Some(Tile(0x38)));

    assert_eq!(
        parse_hand("EEE 567s 123456789p"),
        Err(ParseError::TooManyTilesForFixedPack { pos: 19 })
    );
}

#[test]
fn test_concealed_kong() {
    let ph = parse_hand("[1111m]").unwrap();
    assert_eq!(ph.hand.fixed_packs, vec![Pack::new(false, PackKind::Kong, m(1))]);
    assert_eq!(ph.hand.tile_count(), 0);

    let ph = parse_hand("123s[CCCC]22p").unwrap();
    assert_eq!(ph.hand.pack_count(), 2);
    assert!(ph.hand.fixed_packs[0].is_melded());
    assert!(!ph.hand.fixed_packs[1].is_melded());
    assert_eq!(ph.hand.standing_tiles, vec![Tile(0x32), Tile(0x32)]);

    assert_eq!(
        parse_hand("[1112m]"),
        Err(ParseError::CannotMakeFixedPack { pos: 6 })
    );
    assert_eq!(
        parse_hand("[111m]"),
        Err(ParseError::TooManyTilesForFixedPack { pos: 5 })
    );
}

#[test]
fn test_bracket_balance() {
    assert_eq!(
        parse_hand("1111m]"),
        Err(ParseError::IllegalCharacter { pos: 5 })
    );
    assert_eq!(
        parse_hand("111m [1111m"),
        Err(ParseError::IllegalCharacter { pos: 5 })
    );
    assert_eq!(
        parse_hand("[[1111m]"),
        Err(ParseError::IllegalCharacter { pos: 1 })
    );
    assert_eq!(
        parse_hand("[11m 11m]"),
        Err(ParseError::IllegalCharacter { pos: 4 })
    );
}

#[test]
fn test_no_pack_without_delimiter() {
    let ph = parse_hand("11m22m").unwrap();
    assert_eq!(ph.hand.pack_count(), 0);
    assert_eq!(ph.hand.standing_tiles, vec![m(1), m(1), m(2), m(2)]);
}

#[test]
fn test_consecutive_delimiters() {
    let ph = parse_hand("  123m  5z").unwrap();
    assert_eq!(ph.hand.pack_count(), 1);
    assert_eq!(ph.hand.standing_tiles, vec![TILE_C]);
}

#[test]
fn test_errors() {
    assert_eq!(
        parse_hand("123m x"),
        Err(ParseError::IllegalCharacter { pos: 5 })
    );
    assert_eq!(
        parse_hand("111m 8z"),
        Err(ParseError::IllegalCharacter { pos: 6 })
    );
    assert_eq!(
        parse_hand("123"),
        Err(ParseError::NoSuffixAfterDigit { pos: 3 })
    );
    assert_eq!(
        parse_hand("11122m "),
        Err(ParseError::TooManyTilesForFixedPack { pos: 6 })
    );
    assert_eq!(
        parse_hand("135m "),
        Err(ParseError::CannotMakeFixedPack { pos: 4 })
    );
    assert_eq!(
        parse_hand("111m 222m 333m 444m 555m "),
        Err(ParseError::TooManyFixedPacks { pos: 24 })
    );
    assert_eq!(
        parse_hand("111m 222m 333m 444m [5555m]"),
        Err(ParseError::TooManyFixedPacks { pos: 26 })
    );
}

#[test]
fn test_buffer_full() {
    // 14枚を超える立牌は読み込めない
    assert_eq!(
        parse_hand("11112222333344m5m"),
        Err(ParseError::IllegalCharacter { pos: 15 })
    );
}
