use super::error::ParseError;
use crate::model::*;

/// 区切り文字の直前に溜まった牌を明刻・明順・明槓に変換する.
/// 牌が0枚の場合(区切り文字が連続した場合)は `None`.
pub fn make_fixed_pack(tiles: &[Tile], pos: usize) -> Result<Option<Pack>, ParseError> {
    let pack = match tiles.len() {
        0 => return Ok(None),
        3 => {
            if is_identical(tiles) {
                Pack::new(true, PackKind::Pung, tiles[0])
            } else {
                let mid = chow_middle(tiles).ok_or(ParseError::CannotMakeFixedPack { pos })?;
                Pack::new(true, PackKind::Chow, mid)
            }
        }
        4 => {
            if !is_identical(tiles) {
                return Err(ParseError::CannotMakeFixedPack { pos });
            }
            Pack::new(true, PackKind::Kong, tiles[0])
        }
        _ => return Err(ParseError::TooManyTilesForFixedPack { pos }),
    };
    Ok(Some(pack))
}

/// `[...]` で囲まれた4枚を暗槓に変換する.
pub fn make_concealed_kong(tiles: &[Tile], pos: usize) -> Result<Pack, ParseError> {
    if tiles.len() != 4 {
        return Err(ParseError::TooManyTilesForFixedPack { pos });
    }
    if !is_identical(tiles) {
        return Err(ParseError::CannotMakeFixedPack { pos });
    }
    Ok(Pack::new(false, PackKind::Kong, tiles[0]))
}

#[inline]
fn is_identical(tiles: &[Tile]) -> bool {
    tiles.windows(2).all(|w| w[0] == w[1])
}

// 同じ数牌の連続する3枚なら真ん中の牌を返却 (字牌は順子にならない)
fn chow_middle(tiles: &[Tile]) -> Option<Tile> {
    let mut t = [tiles[0], tiles[1], tiles[2]];
    t.sort();
    if !t[0].is_numbered() {
        return None;
    }
    if t[0].0 + 1 == t[1].0 && t[1].0 + 1 == t[2].0 {
        Some(t[1])
    } else {
        None
    }
}

#[cfg(test)]
fn tiles(s: &str) -> Vec<Tile> {
    super::lexer::parse_tiles(s, MAX_BUFFER)
}

#[test]
fn test_empty_group() {
    assert_eq!(make_fixed_pack(&[], 0), Ok(None));
}

#[test]
fn test_pung_and_kong() {
    let p = make_fixed_pack(&tiles("999s"), 4).unwrap().unwrap();
    assert_eq!(p, Pack::new(true, PackKind::Pung, Tile(0x29)));

    let p = make_fixed_pack(&tiles("EEE"), 3).unwrap().unwrap();
    assert_eq!(p.kind(), PackKind::Pung);
    assert_eq!(p.tile(), TILE_E);

    let p = make_fixed_pack(&tiles("5550m"), 5).unwrap().unwrap();
    assert_eq!(p, Pack::new(true, PackKind::Kong, Tile(0x15)));

    assert_eq!(
        make_fixed_pack(&tiles("5556m"), 5),
        Err(ParseError::CannotMakeFixedPack { pos: 5 })
    );
}

#[test]
fn test_chow() {
    // 並び順は問わない
    let p = make_fixed_pack(&tiles("453p"), 4).unwrap().unwrap();
    assert_eq!(p, Pack::new(true, PackKind::Chow, Tile(0x34)));

    let p = make_fixed_pack(&tiles("789m"), 4).unwrap().unwrap();
    assert_eq!(p.tile(), Tile(0x18));

    for s in ["135m", "12m3p", "891m", "123z", "ESW"] {
        assert_eq!(
            make_fixed_pack(&tiles(s), 9),
            Err(ParseError::CannotMakeFixedPack { pos: 9 }),
            "{}",
            s
        );
    }
}

#[test]
fn test_wrong_count() {
    for s in ["1m", "11m", "11122m"] {
        assert_eq!(
            make_fixed_pack(&tiles(s), 7),
            Err(ParseError::TooManyTilesForFixedPack { pos: 7 })
        );
    }
}

#[test]
fn test_concealed_kong() {
    let p = make_concealed_kong(&tiles("CCCC"), 5).unwrap();
    assert!(!p.is_melded());
    assert_eq!(p.kind(), PackKind::Kong);
    assert_eq!(p.tile(), TILE_C);

    assert_eq!(
        make_concealed_kong(&tiles("111m"), 5),
        Err(ParseError::TooManyTilesForFixedPack { pos: 5 })
    );
    assert_eq!(
        make_concealed_kong(&tiles("1112m"), 6),
        Err(ParseError::CannotMakeFixedPack { pos: 6 })
    );
}
