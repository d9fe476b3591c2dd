use super::error::ParseError;
use crate::model::*;

// 1回の走査で読み取った範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRun {
    pub len: usize,   // 消費した文字数
    pub count: usize, // 追加した牌の数
}

/// `src[start..]` の先頭から連続する牌の並び (数字列+種別文字 または 字牌1文字) を読み取り, `tiles` に追加する.
///
/// 数字は種別未確定のまま追加し, 種別文字を読んだ時点で末尾の未確定の牌にまとめて種別を設定する.
/// 牌以外の文字または `tiles` が `max_cnt` に達した時点で走査を終了する (エラーではない).
/// 走査終了時に種別未確定の牌が残っている場合は, 残りの文字列から最初の種別文字を探して適用する.
pub fn parse_tile_run(
    src: &str,
    start: usize,
    tiles: &mut Vec<Tile>,
    max_cnt: usize,
) -> Result<TileRun, ParseError> {
    let n0 = tiles.len();
    let bytes = src.as_bytes();

    let mut p = start;
    while tiles.len() < max_cnt && p < bytes.len() {
        let c = bytes[p] as char;
        if let Some(r) = rank_from_char(c) {
            tiles.push(Tile(r));
        } else if let Some(suit) = suit_from_char(c) {
            assign_suit(tiles, suit, p)?;
        } else if let Some(t) = Tile::from_honor_letter(c) {
            // 字牌1文字の前に種別未確定の数字が残っている
            if has_pending(tiles) {
                return Err(ParseError::NoSuffixAfterDigit { pos: p });
            }
            tiles.push(t);
        } else {
            break;
        }
        p += 1;
    }

    // 容量超過で途中の数字を読み捨てた場合などは直近の種別文字を採用
    if has_pending(tiles) {
        let (off, suit) =
            find_suffix(&bytes[p..]).ok_or(ParseError::NoSuffixAfterDigit { pos: p })?;
        assign_suit(tiles, suit, p + off)?;
        p += off + 1;
    }

    Ok(TileRun {
        len: p - start,
        count: tiles.len() - n0,
    })
}

/// 文字列から牌の並びを最大 `max_cnt` 枚読み取る.
/// 途中でエラーになった場合は空の配列を返す.
pub fn parse_tiles(s: &str, max_cnt: usize) -> Vec<Tile> {
    let mut tiles = vec![];
    match parse_tile_run(s, 0, &mut tiles, max_cnt) {
        Ok(run) if run.len > 0 => tiles,
        _ => vec![],
    }
}

#[inline]
fn has_pending(tiles: &[Tile]) -> bool {
    tiles.last().map_or(false, |t| !t.is_suited())
}

// 最初に現れる種別文字の位置と種別
// startが文字境界上にあるとは限らないのでバイト単位で探す
fn find_suffix(rest: &[u8]) -> Option<(usize, Suit)> {
    rest.iter()
        .enumerate()
        .find_map(|(i, &b)| suit_from_char(b as char).map(|s| (i, s)))
}

fn assign_suit(tiles: &mut [Tile], suit: Suit, pos: usize) -> Result<(), ParseError> {
    if suit == SUIT_HONORS {
        assign_honor_suit(tiles, pos)
    } else {
        assign_numbered_suit(tiles, suit);
        Ok(())
    }
}

// 末尾から種別が確定している牌の手前までに種別を設定
fn assign_numbered_suit(tiles: &mut [Tile], suit: Suit) {
    for t in tiles.iter_mut().rev().take_while(|t| !t.is_suited()) {
        t.0 |= suit;
    }
}

// 字牌は1~7のみ
fn assign_honor_suit(tiles: &mut [Tile], pos: usize) -> Result<(), ParseError> {
    for t in tiles.iter_mut().rev().take_while(|t| !t.is_suited()) {
        if t.rank() > DP {
            return Err(ParseError::IllegalCharacter { pos });
        }
        t.0 |= SUIT_HONORS;
    }
    Ok(())
}

#[cfg(test)]
fn lex(s: &str, max_cnt: usize) -> Result<(TileRun, Vec<Tile>), ParseError> {
    let mut tiles = vec![];
    let run = parse_tile_run(s, 0, &mut tiles, max_cnt)?;
    Ok((run, tiles))
}

#[test]
fn test_numbered_run() {
    let (run, tiles) = lex("123m", MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 4, count: 3 });
    assert_eq!(tiles, vec![Tile(0x11), Tile(0x12), Tile(0x13)]);

    let (_, tiles) = lex("19s0p", MAX_BUFFER).unwrap();
    assert_eq!(tiles, vec![Tile(0x21), Tile(0x29), Tile(0x35)]);
}

#[test]
fn test_honor_run() {
    let (_, tiles) = lex("1234567z", MAX_BUFFER).unwrap();
    assert_eq!(
        tiles,
        vec![TILE_E, TILE_S, TILE_W, TILE_N, TILE_C, TILE_F, TILE_P]
    );

    let (run, tiles) = lex("ESWNCFP", MAX_BUFFER).unwrap();
    assert_eq!(run.count, 7);
    assert_eq!(tiles[6], TILE_P);

    assert_eq!(
        lex("8z", MAX_BUFFER),
        Err(ParseError::IllegalCharacter { pos: 1 })
    );
    assert_eq!(
        lex("119z", MAX_BUFFER),
        Err(ParseError::IllegalCharacter { pos: 3 })
    );
}

#[test]
fn test_mixed_run() {
    let (run, tiles) = lex("E12mC", MAX_BUFFER).unwrap();
    assert_eq!(run.len, 5);
    assert_eq!(tiles, vec![TILE_E, Tile(0x11), Tile(0x12), TILE_C]);

    // 字牌1文字の前の数字に種別がない
    assert_eq!(
        lex("12E3m", MAX_BUFFER),
        Err(ParseError::NoSuffixAfterDigit { pos: 2 })
    );
}

#[test]
fn test_run_stops_at_other_char() {
    let (run, tiles) = lex("12m 3p", MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 3, count: 2 });
    assert_eq!(tiles.len(), 2);

    let (run, _) = lex("]", MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 0, count: 0 });
}

#[test]
fn test_no_suffix() {
    assert_eq!(
        lex("123", MAX_BUFFER),
        Err(ParseError::NoSuffixAfterDigit { pos: 3 })
    );
    assert_eq!(
        lex("1m23 E", MAX_BUFFER),
        Err(ParseError::NoSuffixAfterDigit { pos: 4 })
    );
}

#[test]
fn test_suffix_repair() {
    // 区切り文字の先にある種別文字を採用
    let (run, tiles) = lex("12 3m", MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 5, count: 2 });
    assert_eq!(tiles, vec![Tile(0x11), Tile(0x12)]);

    // 容量超過分の数字は読み捨て
    let (run, tiles) = lex("1111111111111111m", MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 17, count: 14 });
    assert!(tiles.iter().all(|&t| t == Tile(0x11)));

    let (run, tiles) = lex("123m", 2).unwrap();
    assert_eq!(run, TileRun { len: 4, count: 2 });
    assert_eq!(tiles, vec![Tile(0x11), Tile(0x12)]);

    assert_eq!(
        lex("999999z", 3),
        Err(ParseError::IllegalCharacter { pos: 6 })
    );
}

#[test]
fn test_append_to_buffer() {
    let mut tiles = vec![TILE_E];
    let run = parse_tile_run("xx1s", 2, &mut tiles, MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 2, count: 1 });
    assert_eq!(tiles, vec![TILE_E, Tile(0x21)]);

    // バッファが満杯の場合は何も読まない
    let mut tiles = vec![TILE_E; MAX_BUFFER];
    let run = parse_tile_run("1s", 0, &mut tiles, MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 0, count: 0 });

    // 開始位置がマルチバイト文字の途中でも種別文字を探せる
    let mut tiles = vec![Tile(1)];
    let run = parse_tile_run("é1m", 1, &mut tiles, MAX_BUFFER).unwrap();
    assert_eq!(run, TileRun { len: 3, count: 0 });
    assert_eq!(tiles, vec![Tile(0x11)]);
}

#[test]
fn test_parse_tiles() {
    assert_eq!(parse_tiles("123456789m11222z", 14).len(), 14);
    assert_eq!(parse_tiles("0p", 14), vec![Tile(0x35)]);
    assert_eq!(parse_tiles("123m", 2).len(), 2);
    assert!(parse_tiles("8z", 14).is_empty());
    assert!(parse_tiles("123", 14).is_empty());
    assert!(parse_tiles("x1m", 14).is_empty());
    assert!(parse_tiles("", 14).is_empty());
}
