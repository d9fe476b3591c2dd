use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mahjong_notation::model::*;
use mahjong_notation::notation::*;

const SUITS: [(Suit, char); 4] = [
    (SUIT_CHARACTERS, 'm'),
    (SUIT_BAMBOO, 's'),
    (SUIT_DOTS, 'p'),
    (SUIT_HONORS, 'z'),
];

fn suit_char(t: Tile) -> char {
    SUITS.iter().find(|(s, _)| *s == t.suit()).unwrap().1
}

fn digit(t: Tile, rng: &mut StdRng) -> char {
    // 赤5は'0'でも表記できる
    if t.is_numbered() && t.rank() == 5 && rng.gen_bool(0.5) {
        '0'
    } else {
        (b'0' + t.rank()) as char
    }
}

fn random_tile(rng: &mut StdRng) -> Tile {
    let (suit, _) = SUITS[rng.gen_range(0..4)];
    let max = if suit == SUIT_HONORS { 7 } else { 9 };
    Tile::new(suit, rng.gen_range(1..=max))
}

fn write_tiles(tiles: &[Tile], rng: &mut StdRng) -> String {
    let mut s = String::new();
    for &t in tiles {
        s.push(digit(t, rng));
        s.push(suit_char(t));
    }
    s
}

// 期待する副露と立牌, 和了牌, 手牌文字列を生成
fn random_hand(rng: &mut StdRng) -> (Vec<Pack>, Vec<Tile>, Option<Tile>, String) {
    let mut packs = vec![];
    let mut groups = vec![];
    for _ in 0..rng.gen_range(0..=MAX_PACK) {
        let (pack, exp) = match rng.gen_range(0..4) {
            0 => {
                let (suit, c) = SUITS[rng.gen_range(0..3)];
                let r = rng.gen_range(2..=8);
                let mid = Tile::new(suit, r);
                // 順子は並び順を問わない
                let exp = format!("{}{}{}{}", r + 1, r - 1, r, c);
                (Pack::new(true, PackKind::Chow, mid), exp)
            }
            1 => {
                let t = random_tile(rng);
                let exp = write_tiles(&[t; 3], rng);
                (Pack::new(true, PackKind::Pung, t), exp)
            }
            2 => {
                let t = random_tile(rng);
                let exp = write_tiles(&[t; 4], rng);
                (Pack::new(true, PackKind::Kong, t), exp)
            }
            _ => {
                let t = random_tile(rng);
                let exp = format!("[{}]", write_tiles(&[t; 4], rng));
                (Pack::new(false, PackKind::Kong, t), exp)
            }
        };
        packs.push(pack);
        groups.push(exp);
    }

    let n = MAX_STANDING - 3 * packs.len();
    let standing: Vec<Tile> = (0..n).map(|_| random_tile(rng)).collect();
    let win = if rng.gen_bool(0.5) {
        Some(random_tile(rng))
    } else {
        None
    };

    let mut all = standing.clone();
    all.extend(win);
    groups.push(write_tiles(&all, rng));
    (packs, standing, win, groups.join(" "))
}

#[test]
fn test_random_hands() {
    let mut rng = StdRng::seed_from_u64(20190920);
    for _ in 0..500 {
        let (packs, standing, win, exp) = random_hand(&mut rng);
        let ph = parse_hand(&exp).unwrap_or_else(|e| panic!("{}: '{}'", e, exp));
        assert_eq!(ph.hand.fixed_packs, packs, "{}", exp);
        assert_eq!(ph.hand.standing_tiles, standing, "{}", exp);
        assert_eq!(ph.win_tile, win, "{}", exp);
        assert!(ph.hand.pack_count() * 3 + ph.hand.tile_count() <= MAX_STANDING);

        // 同じ文字列は常に同じ結果
        assert_eq!(parse_hand(&exp), Ok(ph));
    }
}

#[test]
fn test_tile_count_matches_digits() {
    for s in ["1m", "123m", "123456789s", "0505p", "1234567z"] {
        let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
        assert_eq!(parse_tiles(s, MAX_BUFFER).len(), digits, "{}", s);
    }
}

#[test]
fn test_red_five() {
    assert_eq!(parse_tiles("0p", MAX_BUFFER), vec![Tile::new(SUIT_DOTS, 5)]);
    assert_eq!(parse_tiles("0p", MAX_BUFFER), parse_tiles("5p", MAX_BUFFER));
}

#[test]
fn test_honor_ranks() {
    let honors = [TILE_E, TILE_S, TILE_W, TILE_N, TILE_C, TILE_F, TILE_P];
    for (i, &t) in honors.iter().enumerate() {
        let s = format!("{}z", i + 1);
        assert_eq!(parse_tiles(&s, MAX_BUFFER), vec![t]);
        assert_eq!(parse_hand(&s).unwrap().hand.standing_tiles, vec![t]);
    }
    assert_eq!(
        parse_hand("8z").unwrap_err().code(),
        PARSE_ERROR_ILLEGAL_CHARACTER
    );
    assert_eq!(
        parse_hand("9z").unwrap_err().code(),
        PARSE_ERROR_ILLEGAL_CHARACTER
    );
}

#[test]
fn test_documented_hand() {
    let ph = parse_hand("111m 234m 678m 999s 55p").unwrap();
    let kinds: Vec<PackKind> = ph.hand.fixed_packs.iter().map(|p| p.kind()).collect();
    assert_eq!(
        kinds,
        vec![PackKind::Pung, PackKind::Chow, PackKind::Chow, PackKind::Pung]
    );
    assert!(ph.hand.fixed_packs.iter().all(|p| p.is_melded()));
    assert_eq!(ph.hand.pack_count(), 4);
    let p5 = Tile::new(SUIT_DOTS, 5);
    assert_eq!(ph.hand.standing_tiles, vec![p5]);
    assert_eq!(ph.win_tile, Some(p5));
}

#[test]
fn test_winning_tile_split() {
    let ph = parse_hand("123456789m11222z").unwrap();
    let all = parse_tiles("123456789m11222z", MAX_BUFFER);
    assert_eq!(ph.hand.standing_tiles, all[..13].to_vec());
    assert_eq!(ph.win_tile, Some(all[13]));
}

#[test]
fn test_concealed_kong_visibility() {
    let ph = parse_hand("[1111m]").unwrap();
    assert_eq!(ph.hand.pack_count(), 1);
    assert!(!ph.hand.fixed_packs[0].is_melded());
    assert!(ph.hand.contains_kong());
    assert_eq!(ph.hand.count_in_fixed_packs(Tile::new(SUIT_CHARACTERS, 1)), 4);
}

#[test]
fn test_status_codes() {
    let cases = [
        ("123", PARSE_ERROR_NO_SUFFIX_AFTER_DIGIT),
        ("11122m ", PARSE_ERROR_TOO_MANY_TILES_FOR_FIXED_PACK),
        ("135m ", PARSE_ERROR_CANNOT_MAKE_FIXED_PACK),
        ("111m 222m 333m 444m 555m ", PARSE_ERROR_TOO_MANY_FIXED_PACKS),
        ("1m\t2m", PARSE_ERROR_ILLEGAL_CHARACTER),
        ("東", PARSE_ERROR_ILLEGAL_CHARACTER),
    ];
    for (s, code) in cases {
        assert_eq!(parse_hand(s).map_err(|e| e.code()).err(), Some(code), "{}", s);
    }
}

#[test]
fn test_json_output() {
    let ph = parse_hand("[EEEE] 5m5m").unwrap();
    let v: serde_json::Value = serde_json::to_value(&ph).unwrap();
    assert_eq!(v["hand"]["fixed_packs"][0]["melded"], false);
    assert_eq!(v["hand"]["fixed_packs"][0]["kind"], "Kong");
    assert_eq!(v["hand"]["fixed_packs"][0]["tile"], 0x41);
    assert_eq!(v["hand"]["standing_tiles"], serde_json::json!([0x15, 0x15]));
    assert!(v["win_tile"].is_null());

    let hand: HandTiles = serde_json::from_value(v["hand"].clone()).unwrap();
    assert_eq!(hand, ph.hand);
}
